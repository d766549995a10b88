/// Curated Web3 and memecoin fact list served by [`super::DexScreenerClient::get_web3_facts`].
///
/// Local static data, not provider data; the accessor only simulates a
/// fetch delay.
use serde::Serialize;

/// One entry of the curated fact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub id: u32,
    pub category: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub(super) const WEB3_FACTS: &[Fact] = &[
    Fact {
        id: 1,
        category: "Memecoins",
        icon: "🐕",
        title: "Dogecoin was created as a joke in 2013",
        content: "Dogecoin was created by Jackson Palmer and Billy Markus as a parody of Bitcoin, inspired by the popular \"Doge\" meme featuring a Shiba Inu. Today it has a market cap over $15 billion.",
    },
    Fact {
        id: 2,
        category: "History",
        icon: "🎨",
        title: "First crypto-cat appeared in 2014",
        content: "Bitcat ($BTCAT) was the first crypto-cat, recorded on the blockchain on September 28, 2014, as ASCII art in block 322,917. It paved the way for all future crypto-cats.",
    },
    Fact {
        id: 3,
        category: "Statistics",
        icon: "📊",
        title: "Memecoins dominate 22.49% of crypto market",
        content: "In 2024, meme coins claimed the largest market share at 22.49%, surpassing major blockchains like Solana and Ethereum in terms of market attention.",
    },
    Fact {
        id: 4,
        category: "Solana",
        icon: "⚡",
        title: "40,000-50,000 new meme tokens created daily",
        content: "According to DEX aggregator reports, nearly 40,000 to 50,000 new meme tokens are created daily on Solana during normal periods, spiking to 100,000 during viral moments.",
    },
    Fact {
        id: 5,
        category: "History",
        icon: "🖼️",
        title: "Rare Pepes were the second NFT series ever",
        content: "From 2016-2018, Rare Pepe memes on Counterparty protocol became the second NFT series in history. Some Rare Pepes have sold for over $500,000.",
    },
    Fact {
        id: 6,
        category: "Web3",
        icon: "🌐",
        title: "Web3 market cap reached $2.66 trillion",
        content: "The cryptocurrency market rebounded strongly in 2024, with total market capitalization reaching $2.66 trillion, nearing its all-time high from 2021.",
    },
    Fact {
        id: 7,
        category: "AI",
        icon: "🤖",
        title: "AI crypto tokens grew from $2.7B to $39B",
        content: "The market capitalization of AI-related crypto tokens skyrocketed from $2.7 billion in April 2023 to over $39 billion in 2024.",
    },
    Fact {
        id: 8,
        category: "Memecoins",
        icon: "💎",
        title: "Top 10 memecoins control 90% of market",
        content: "In 2024, just 10 meme coins dominate 90% of the market capitalization within the meme coin niche, with Dogecoin leading at $15.21 billion.",
    },
    Fact {
        id: 9,
        category: "Statistics",
        icon: "⏱️",
        title: "Average memecoin lifespan is 1.3 hours",
        content: "The rapid creation of meme coins is evident in their short average lifespan, with most liquid tokens only about 1.3 hours old due to high creation rate.",
    },
    Fact {
        id: 10,
        category: "Ethereum",
        icon: "⚖️",
        title: "EtherRocks were originally a Reddit joke",
        content: "EtherRocks started as a joke on Reddit in 2017, centered around collecting 100 colorful clipart rocks. By 2021, they reached a floor price of 305 ETH ($1 million).",
    },
    Fact {
        id: 11,
        category: "DeFi",
        icon: "🥪",
        title: "Food coins offered 10,000% yields in DeFi Summer",
        content: "During DeFi Summer 2020, \"food coin\" yield farms like Yam and Pickle offered astronomical returns of up to 10,000% annualized in meme coins.",
    },
    Fact {
        id: 12,
        category: "Memecoins",
        icon: "🚀",
        title: "BONK helped revive Solana after FTX collapse",
        content: "$BONK was launched to reignite interest in Solana after FTX collapse. It worked spectacularly, with over 129 integrations across DeFi, Gaming, and NFT applications.",
    },
    Fact {
        id: 13,
        category: "Gaming",
        icon: "🎮",
        title: "65 Web3 games migrated to Layer-2 in 2024",
        content: "To escape Ethereum's high gas fees, 65 games migrated to layer-2 networks like Polygon, Immutable, and Arbitrum in 2024, including Champions Ascension RPG.",
    },
    Fact {
        id: 14,
        category: "Statistics",
        icon: "📈",
        title: "Pepe coin reached $4.6B market cap in 2025",
        content: "The Pepe meme coin, based on the long-standing \"Pepe the Frog\" meme, achieved an incredible $4.6 billion market capitalization in the first half of 2025.",
    },
    Fact {
        id: 15,
        category: "Web3",
        icon: "🏦",
        title: "Tokenized assets market projected to hit $500B",
        content: "The tokenization of real-world assets market is projected to reach $500 billion in 2025 (excluding stablecoins), with BlackRock and JPMorgan leading the charge.",
    },
    Fact {
        id: 16,
        category: "History",
        icon: "🎯",
        title: "First internet meme was born in 1993",
        content: "The birth of the modern internet meme in 1993 marked the last paradigm shift before blockchain memes, transforming how we express and share ideas digitally.",
    },
    Fact {
        id: 17,
        category: "Statistics",
        icon: "🔥",
        title: "Pump.fun launched 5 million tokens since January",
        content: "Pump.fun, launched in January 2024, has enabled the creation of nearly 5 million tokens, revolutionizing memecoin deployment with no-code launches.",
    },
    Fact {
        id: 18,
        category: "Memecoins",
        icon: "🦛",
        title: "MOODENG and PNUT reached billion-dollar valuations",
        content: "Memecoins themed around a baby hippo (MOODENG) and a slain squirrel (PNUT) rocketed to multi-billion market caps, proving anything can be tokenized.",
    },
    Fact {
        id: 19,
        category: "Web3",
        icon: "🛰️",
        title: "First DePIN satellite launched in December 2024",
        content: "Spacecoin launched its first satellite (CTC-0) on the Creditcoin blockchain in December 2024 to provide affordable, high-speed internet to underserved regions.",
    },
    Fact {
        id: 20,
        category: "Statistics",
        icon: "💰",
        title: "60% of Americans expect crypto prices to rise",
        content: "A Security.org report shows 60% of Americans familiar with crypto expect prices to rise in 2025, with 14% of non-holders planning to invest.",
    },
    Fact {
        id: 21,
        category: "History",
        icon: "🎭",
        title: "Cave paintings were the first memes",
        content: "The earliest humans created the first known \"memes\" by etching thoughts and observations onto cave walls with charcoal and chisels, traded hand-to-hand between people.",
    },
    Fact {
        id: 22,
        category: "Memecoins",
        icon: "👑",
        title: "Dogecoin is among world's top 10 cryptocurrencies",
        content: "Despite starting as a joke, Dogecoin consistently ranks among the world's top ten cryptocurrencies by market capitalization, while Shiba Inu is in the top 15.",
    },
    Fact {
        id: 23,
        category: "Solana",
        icon: "📱",
        title: "Solana averages 28,000 new tokens daily",
        content: "From averaging 9,000 new tokens per day in late 2023, Solana now averages more than triple that at 28,000 per day, with peaks reaching 100,000 tokens.",
    },
    Fact {
        id: 24,
        category: "Statistics",
        icon: "⚠️",
        title: "40% of memecoins are pump-and-dump schemes",
        content: "Studies show around 40% of memecoin projects involve pump-and-dump schemes, 30% are rug pulls, 20% include hidden fees, and 2-3% are honeypot scams.",
    },
    Fact {
        id: 25,
        category: "Web3",
        icon: "🔗",
        title: "Ethereum was the original platform for memecoins",
        content: "Before Solana's rise, Ethereum was the primary platform for memecoins through 2020-2022, hosting iconic tokens like SHIB, PEPE, and Harry Potter Obama Sonic 10 Inu.",
    },
];
