//! Static fallback table of plausible company baselines, used when the
//! live provider is unavailable or for symbols it cannot resolve.

/// Fixed baseline for a well-known symbol. Prices get a small jitter on
/// each demo build so repeated fallbacks do not look frozen.
pub struct CompanyBaseline {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub industry: &'static str,
    pub employees: u64,
    pub country: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub market_cap: f64,
    pub revenue: f64,
    pub pe_ratio: f64,
    pub profit_margin: f64,
    pub revenue_growth: f64,
    pub base_volume: f64,
}

pub const BASELINES: &[CompanyBaseline] = &[
    CompanyBaseline {
        symbol: "AAPL",
        name: "Apple Inc.",
        sector: "Technology",
        industry: "Consumer Electronics",
        employees: 164_000,
        country: "United States",
        description: "Apple Inc. designs, manufactures, and markets smartphones, personal computers, tablets, wearables, and accessories worldwide.",
        price: 175.45,
        market_cap: 2.75e12,
        revenue: 3.83e11,
        pe_ratio: 28.9,
        profit_margin: 25.3,
        revenue_growth: 2.8,
        base_volume: 58_000_000.0,
    },
    CompanyBaseline {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        sector: "Technology",
        industry: "Software - Infrastructure",
        employees: 221_000,
        country: "United States",
        description: "Microsoft Corporation develops and supports software, services, devices, and solutions worldwide.",
        price: 378.85,
        market_cap: 2.81e12,
        revenue: 2.27e11,
        pe_ratio: 35.2,
        profit_margin: 34.1,
        revenue_growth: 12.8,
        base_volume: 24_000_000.0,
    },
    CompanyBaseline {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        sector: "Communication Services",
        industry: "Internet Content & Information",
        employees: 182_000,
        country: "United States",
        description: "Alphabet Inc. offers various products and platforms including Search, YouTube, Android, and Google Cloud.",
        price: 139.70,
        market_cap: 1.76e12,
        revenue: 3.07e11,
        pe_ratio: 24.6,
        profit_margin: 24.0,
        revenue_growth: 8.7,
        base_volume: 27_000_000.0,
    },
    CompanyBaseline {
        symbol: "AMZN",
        name: "Amazon.com, Inc.",
        sector: "Consumer Cyclical",
        industry: "Internet Retail",
        employees: 1_541_000,
        country: "United States",
        description: "Amazon.com, Inc. engages in the retail sale of consumer products and subscriptions, and provides cloud computing services.",
        price: 145.20,
        market_cap: 1.50e12,
        revenue: 5.75e11,
        pe_ratio: 42.3,
        profit_margin: 5.3,
        revenue_growth: 11.8,
        base_volume: 45_000_000.0,
    },
    CompanyBaseline {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        sector: "Technology",
        industry: "Semiconductors",
        employees: 29_600,
        country: "United States",
        description: "NVIDIA Corporation provides graphics, compute, and networking solutions worldwide.",
        price: 495.20,
        market_cap: 1.22e12,
        revenue: 6.09e10,
        pe_ratio: 41.1,
        profit_margin: 48.9,
        revenue_growth: 22.4,
        base_volume: 41_000_000.0,
    },
    CompanyBaseline {
        symbol: "TSLA",
        name: "Tesla, Inc.",
        sector: "Consumer Cyclical",
        industry: "Auto Manufacturers",
        employees: 140_500,
        country: "United States",
        description: "Tesla, Inc. designs, develops, manufactures, and sells electric vehicles and energy generation and storage systems.",
        price: 248.50,
        market_cap: 7.90e11,
        revenue: 9.68e10,
        pe_ratio: 44.8,
        profit_margin: 15.5,
        revenue_growth: 18.8,
        base_volume: 112_000_000.0,
    },
    CompanyBaseline {
        symbol: "JPM",
        name: "JPMorgan Chase & Co.",
        sector: "Financial Services",
        industry: "Banks - Diversified",
        employees: 309_900,
        country: "United States",
        description: "JPMorgan Chase & Co. operates as a financial services company worldwide.",
        price: 158.30,
        market_cap: 4.58e11,
        revenue: 1.58e11,
        pe_ratio: 10.9,
        profit_margin: 32.1,
        revenue_growth: 6.1,
        base_volume: 9_500_000.0,
    },
    CompanyBaseline {
        symbol: "JNJ",
        name: "Johnson & Johnson",
        sector: "Healthcare",
        industry: "Drug Manufacturers - General",
        employees: 134_400,
        country: "United States",
        description: "Johnson & Johnson researches, develops, manufactures, and sells various products in the healthcare field worldwide.",
        price: 156.75,
        market_cap: 3.77e11,
        revenue: 8.53e10,
        pe_ratio: 15.8,
        profit_margin: 20.1,
        revenue_growth: 4.2,
        base_volume: 7_200_000.0,
    },
];

pub fn baseline(symbol: &str) -> Option<&'static CompanyBaseline> {
    BASELINES.iter().find(|b| b.symbol == symbol)
}

/// Sector/industry pairs drawn from when synthesizing unknown symbols.
pub const SYNTHETIC_SECTORS: &[(&str, &str)] = &[
    ("Technology", "Software - Application"),
    ("Healthcare", "Biotechnology"),
    ("Financial Services", "Asset Management"),
    ("Consumer Cyclical", "Specialty Retail"),
    ("Industrials", "Specialty Industrial Machinery"),
    ("Energy", "Oil & Gas E&P"),
];
