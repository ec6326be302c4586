#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub symbol: &'static str,
    pub name: &'static str,
}

const EURO: Currency = Currency {
    symbol: "€",
    name: "Euro",
};
const POUND: Currency = Currency {
    symbol: "£",
    name: "Pound",
};
const DOLLAR: Currency = Currency {
    symbol: "$",
    name: "Dollar",
};
const CANADIAN_DOLLAR: Currency = Currency {
    symbol: "C$",
    name: "Canadian Dollar",
};
const AUSTRALIAN_DOLLAR: Currency = Currency {
    symbol: "A$",
    name: "Australian Dollar",
};
const YEN: Currency = Currency {
    symbol: "¥",
    name: "Yen",
};
const WON: Currency = Currency {
    symbol: "₩",
    name: "Won",
};
const SINGAPORE_DOLLAR: Currency = Currency {
    symbol: "S$",
    name: "Singapore Dollar",
};
const RINGGIT: Currency = Currency {
    symbol: "RM",
    name: "Ringgit",
};
const BAHT: Currency = Currency {
    symbol: "฿",
    name: "Baht",
};
const RUBLE: Currency = Currency {
    symbol: "₽",
    name: "Ruble",
};
const DIRHAM: Currency = Currency {
    symbol: "AED",
    name: "Dirham",
};
const RMB: Currency = Currency {
    symbol: "¥",
    name: "RMB",
};
const HONG_KONG_DOLLAR: Currency = Currency {
    symbol: "HK$",
    name: "Hong Kong Dollar",
};
const PATACA: Currency = Currency {
    symbol: "MOP",
    name: "Pataca",
};
const TAIWAN_DOLLAR: Currency = Currency {
    symbol: "NT$",
    name: "New Taiwan Dollar",
};

// Exact city names as the model tends to pass them.
const CITY_CURRENCIES: &[(&str, Currency)] = &[
    ("Granada", EURO),
    ("Madrid", EURO),
    ("Barcelona", EURO),
    ("Valencia", EURO),
    ("Seville", EURO),
    ("Sevilla", EURO),
    ("Bilbao", EURO),
    ("Zaragoza", EURO),
    ("Malaga", EURO),
    ("Murcia", EURO),
    ("Palma", EURO),
    ("Cordoba", EURO),
    ("Alicante", EURO),
    ("Toledo", EURO),
    ("Salamanca", EURO),
    ("Burgos", EURO),
    ("Leon", EURO),
    ("Valladolid", EURO),
    ("Logrono", EURO),
    ("Pamplona", EURO),
    ("San Sebastian", EURO),
    ("Vitoria", EURO),
    ("Ronda", EURO),
    ("Paris", EURO),
    ("Berlin", EURO),
    ("Munich", EURO),
    ("Amsterdam", EURO),
    ("Brussels", EURO),
    ("Rome", EURO),
    ("Milan", EURO),
    ("London", POUND),
    ("New York", DOLLAR),
    ("NYC", DOLLAR),
    ("Los Angeles", DOLLAR),
    ("LA", DOLLAR),
    ("San Francisco", DOLLAR),
    ("SF", DOLLAR),
    ("Chicago", DOLLAR),
    ("Washington", DOLLAR),
    ("DC", DOLLAR),
    ("Boston", DOLLAR),
    ("Seattle", DOLLAR),
    ("Miami", DOLLAR),
    ("Las Vegas", DOLLAR),
    ("Toronto", CANADIAN_DOLLAR),
    ("Vancouver", CANADIAN_DOLLAR),
    ("Sydney", AUSTRALIAN_DOLLAR),
    ("Melbourne", AUSTRALIAN_DOLLAR),
    ("Brisbane", AUSTRALIAN_DOLLAR),
    ("Tokyo", YEN),
    ("Seoul", WON),
    ("Singapore", SINGAPORE_DOLLAR),
    ("Kuala Lumpur", RINGGIT),
    ("KL", RINGGIT),
    ("Bangkok", BAHT),
    ("Moscow", RUBLE),
    ("Saint Petersburg", RUBLE),
    ("Dubai", DIRHAM),
    ("Beijing", RMB),
    ("Shanghai", RMB),
    ("Guangzhou", RMB),
    ("Shenzhen", RMB),
    ("Hangzhou", RMB),
    ("Nanjing", RMB),
    ("Suzhou", RMB),
    ("Chengdu", RMB),
    ("Chongqing", RMB),
    ("Xian", RMB),
    ("Wuhan", RMB),
    ("Tianjin", RMB),
    ("Hong Kong", HONG_KONG_DOLLAR),
    ("HK", HONG_KONG_DOLLAR),
    ("Macau", PATACA),
    ("Macao", PATACA),
    ("Taipei", TAIWAN_DOLLAR),
];

const COUNTRY_KEYWORDS: &[(&[&str], Currency)] = &[
    (&["spain", "spanish"], EURO),
    (
        &[
            "france",
            "germany",
            "italy",
            "netherlands",
            "belgium",
            "austria",
            "portugal",
        ],
        EURO,
    ),
    (&["usa", "united states", "america"], DOLLAR),
    (&["uk", "united kingdom", "britain", "england"], POUND),
];

/// Local currency for a city: exact name first, then country keywords in the
/// text, then Euro.
pub fn currency_for(city: &str) -> Currency {
    if let Some((_, currency)) = CITY_CURRENCIES.iter().find(|(name, _)| *name == city) {
        return *currency;
    }

    let lowered = city.to_lowercase();
    COUNTRY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(EURO, |(_, currency)| *currency)
}
