use std::sync::LazyLock;

use regex::Regex;

/// Country-qualified city names kept in the user's own script. Native-script
/// forms are written with no separator, Latin forms with whitespace.
const ORIGINAL_FORM_SOURCES: &[&str] = &[
    r"西班牙(格拉纳达|马德里|巴塞罗那|瓦伦西亚|塞维利亚|龙达|毕尔巴鄂|萨拉戈萨|马拉加|穆尔西亚|帕尔马|科尔多瓦|阿利坎特|托莱多|萨拉曼卡|布尔戈斯|莱昂|瓦拉多利德|洛格罗尼奥|潘普洛纳|圣塞巴斯蒂安|维多利亚)",
    r"Spain\s+(Granada|Madrid|Barcelona|Valencia|Seville|Sevilla|Ronda|Bilbao|Zaragoza|Malaga|Murcia|Palma|Cordoba|Alicante|Toledo|Salamanca|Burgos|Leon|Valladolid|Logrono|Pamplona)",
    r"意大利(罗马|米兰|佛罗伦萨|威尼斯|那不勒斯|都灵|博洛尼亚|巴勒莫|热那亚|卡塔尼亚)",
    r"Italy\s+(Rome|Milan|Florence|Venice|Naples|Turin|Bologna|Palermo|Genoa|Catania)",
    r"法国(巴黎|马赛|里昂|图卢兹|尼斯|南特|斯特拉斯堡|蒙彼利埃|波尔多|里尔)",
    r"France\s+(Paris|Marseille|Lyon|Toulouse|Nice|Nantes|Strasbourg|Montpellier|Bordeaux|Lille)",
    r"德国(柏林|慕尼黑|汉堡|科隆|法兰克福|斯图加特|杜塞尔多夫|多特蒙德|埃森|莱比锡)",
    r"Germany\s+(Berlin|Munich|Hamburg|Cologne|Frankfurt|Stuttgart|Dusseldorf|Dortmund|Essen|Leipzig)",
    r"英国(伦敦|曼彻斯特|伯明翰|利兹|格拉斯哥|谢菲尔德|布拉德福德|爱丁堡|利物浦|布里斯托)",
    r"UK\s+(London|Manchester|Birmingham|Leeds|Glasgow|Sheffield|Bradford|Edinburgh|Liverpool|Bristol)",
    r"美国(纽约|洛杉矶|芝加哥|休斯顿|费城|凤凰城|圣安东尼奥|圣地亚哥|达拉斯|圣何塞)",
    r"USA\s+(New York|Los Angeles|Chicago|Houston|Philadelphia|Phoenix|San Antonio|San Diego|Dallas|San Jose)",
];

pub static ORIGINAL_FORM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ORIGINAL_FORM_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("invalid city pattern"))
        .collect()
});

/// `city="..."` as it appears inside a recorded tool call.
pub static CITY_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"city="([^"]*)""#).expect("invalid city argument regex"));
