/// A canonical city name and the spellings that refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityRecord {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

const fn city(name: &'static str, aliases: &'static [&'static str]) -> CityRecord {
    CityRecord { name, aliases }
}

/// Mainland and greater-China cities, listed before the international table.
const CHINESE_CITIES: &[CityRecord] = &[
    city("Beijing", &["北京", "Beijing", "帝都"]),
    city("Shanghai", &["上海", "Shanghai", "魔都"]),
    city("Guangzhou", &["广州", "Guangzhou", "羊城"]),
    city("Shenzhen", &["深圳", "Shenzhen", "鹏城"]),
    city("Hangzhou", &["杭州", "Hangzhou", "西湖"]),
    city("Nanjing", &["南京", "Nanjing", "金陵"]),
    city("Suzhou", &["苏州", "Suzhou", "姑苏"]),
    city("Chengdu", &["成都", "Chengdu", "蓉城"]),
    city("Chongqing", &["重庆", "Chongqing", "山城"]),
    city("Xian", &["西安", "Xi'an", "长安"]),
    city("Wuhan", &["武汉", "Wuhan", "江城"]),
    city("Tianjin", &["天津", "Tianjin"]),
    city("Qingdao", &["青岛", "Qingdao"]),
    city("Dalian", &["大连", "Dalian"]),
    city("Xiamen", &["厦门", "Xiamen", "鹭岛"]),
    city("Changsha", &["长沙", "Changsha", "星城"]),
    city("Zhengzhou", &["郑州", "Zhengzhou"]),
    city("Jinan", &["济南", "Jinan", "泉城"]),
    city("Harbin", &["哈尔滨", "Harbin", "冰城"]),
    city("Shenyang", &["沈阳", "Shenyang"]),
    city("Changchun", &["长春", "Changchun"]),
    city("Kunming", &["昆明", "Kunming", "春城"]),
    city("Guiyang", &["贵阳", "Guiyang"]),
    city("Nanning", &["南宁", "Nanning"]),
    city("Haikou", &["海口", "Haikou"]),
    city("Sanya", &["三亚", "Sanya"]),
    city("Lhasa", &["拉萨", "Lhasa"]),
    city("Urumqi", &["乌鲁木齐", "Urumqi"]),
    city("Yinchuan", &["银川", "Yinchuan"]),
    city("Xining", &["西宁", "Xining"]),
    city("Lanzhou", &["兰州", "Lanzhou"]),
    city("Hohhot", &["呼和浩特", "Hohhot"]),
    city("Shijiazhuang", &["石家庄", "Shijiazhuang"]),
    city("Taiyuan", &["太原", "Taiyuan"]),
    city("Hefei", &["合肥", "Hefei"]),
    city("Nanchang", &["南昌", "Nanchang"]),
    city("Fuzhou", &["福州", "Fuzhou"]),
    city("Wuxi", &["无锡", "Wuxi"]),
    city("Changzhou", &["常州", "Changzhou"]),
    city("Ningbo", &["宁波", "Ningbo"]),
    city("Wenzhou", &["温州", "Wenzhou"]),
    city("Jiaxing", &["嘉兴", "Jiaxing"]),
    city("Jinhua", &["金华", "Jinhua"]),
    city("Shaoxing", &["绍兴", "Shaoxing"]),
    city("Taizhou", &["台州", "Taizhou"]),
    city("Huzhou", &["湖州", "Huzhou"]),
    city("Lishui", &["丽水", "Lishui"]),
    city("Quzhou", &["衢州", "Quzhou"]),
    city("Zhoushan", &["舟山", "Zhoushan"]),
];

const INTERNATIONAL_CITIES: &[CityRecord] = &[
    city("Taipei", &["台北", "Taipei"]),
    city("Hong Kong", &["香港", "Hong Kong", "HK"]),
    city("Macau", &["澳门", "Macau", "Macao"]),
    city("Singapore", &["新加坡", "Singapore", "狮城"]),
    city("Kuala Lumpur", &["吉隆坡", "Kuala Lumpur", "KL"]),
    city("Bangkok", &["曼谷", "Bangkok"]),
    city("Tokyo", &["东京", "Tokyo"]),
    city("Seoul", &["首尔", "Seoul", "汉城"]),
    city("New York", &["纽约", "New York", "NYC"]),
    city("London", &["伦敦", "London"]),
    city("Paris", &["巴黎", "Paris"]),
    city("Sydney", &["悉尼", "Sydney"]),
    city("Toronto", &["多伦多", "Toronto"]),
    city("Vancouver", &["温哥华", "Vancouver"]),
    city("Los Angeles", &["洛杉矶", "Los Angeles", "LA"]),
    city("San Francisco", &["旧金山", "San Francisco", "SF"]),
    city("Chicago", &["芝加哥", "Chicago"]),
    city("Washington", &["华盛顿", "Washington", "DC"]),
    city("Boston", &["波士顿", "Boston"]),
    city("Seattle", &["西雅图", "Seattle"]),
    city("Miami", &["迈阿密", "Miami"]),
    city("Las Vegas", &["拉斯维加斯", "Las Vegas", "赌城"]),
    city("Berlin", &["柏林", "Berlin"]),
    city("Munich", &["慕尼黑", "Munich"]),
    city("Amsterdam", &["阿姆斯特丹", "Amsterdam"]),
    city("Brussels", &["布鲁塞尔", "Brussels"]),
    city("Rome", &["罗马", "Rome"]),
    city("Milan", &["米兰", "Milan"]),
    city("Barcelona", &["巴塞罗那", "Barcelona"]),
    city("Madrid", &["马德里", "Madrid"]),
    city("Moscow", &["莫斯科", "Moscow"]),
    city("Saint Petersburg", &["圣彼得堡", "Saint Petersburg"]),
    city("Dubai", &["迪拜", "Dubai"]),
    city("Cairo", &["开罗", "Cairo"]),
    city("Melbourne", &["墨尔本", "Melbourne"]),
    city("Brisbane", &["布里斯班", "Brisbane"]),
    city("Valencia", &["瓦伦西亚", "Valencia"]),
    city("Granada", &["格拉纳达", "Granada"]),
    city("Seville", &["塞维利亚", "Sevilla", "Seville"]),
    city("Bilbao", &["毕尔巴鄂", "Bilbao"]),
    city("Zaragoza", &["萨拉戈萨", "Zaragoza"]),
    city("Malaga", &["马拉加", "Malaga"]),
    city("Murcia", &["穆尔西亚", "Murcia"]),
    city("Palma", &["帕尔马", "Palma"]),
    city("Las Palmas", &["拉斯帕尔马斯", "Las Palmas"]),
    city("Cordoba", &["科尔多瓦", "Cordoba"]),
    city("Alicante", &["阿利坎特", "Alicante"]),
    city("Vigo", &["维戈", "Vigo"]),
    city("Gijon", &["希洪", "Gijon"]),
    city("Oviedo", &["奥维耶多", "Oviedo"]),
    city(
        "Santiago de Compostela",
        &["圣地亚哥德孔波斯特拉", "Santiago de Compostela"],
    ),
    city("Toledo", &["托莱多", "Toledo"]),
    city("Caceres", &["卡塞雷斯", "Caceres"]),
    city("Badajoz", &["巴达霍斯", "Badajoz"]),
    city("Avila", &["阿维拉", "Avila"]),
    city("Segovia", &["塞哥维亚", "Segovia"]),
    city("Salamanca", &["萨拉曼卡", "Salamanca"]),
    city("Burgos", &["布尔戈斯", "Burgos"]),
    city("Leon", &["莱昂", "Leon"]),
    city("Palencia", &["帕伦西亚", "Palencia"]),
    city("Valladolid", &["瓦拉多利德", "Valladolid"]),
    city("Zamora", &["萨莫拉", "Zamora"]),
    city("Logrono", &["洛格罗尼奥", "Logrono"]),
    city("Pamplona", &["潘普洛纳", "Pamplona"]),
    city("San Sebastian", &["圣塞巴斯蒂安", "San Sebastian"]),
    city("Vitoria", &["维多利亚", "Vitoria"]),
    city("Huesca", &["韦斯卡", "Huesca"]),
    city("Teruel", &["特鲁埃尔", "Teruel"]),
    city("Castellon", &["卡斯特利翁", "Castellon"]),
    city("Jaen", &["哈恩", "Jaen"]),
    city("Almeria", &["阿尔梅里亚", "Almeria"]),
    city("Cadiz", &["加的斯", "Cadiz"]),
    city("Huelva", &["韦尔瓦", "Huelva"]),
    city("Jerez", &["赫雷斯", "Jerez"]),
    city("Algeciras", &["阿尔赫西拉斯", "Algeciras"]),
    city("Marbella", &["马贝拉", "Marbella"]),
    city("Estepona", &["埃斯特波纳", "Estepona"]),
    city("Fuengirola", &["富恩希罗拉", "Fuengirola"]),
    city("Torremolinos", &["托雷莫利诺斯", "Torremolinos"]),
    city("Benalmadena", &["贝纳尔马德纳", "Benalmadena"]),
    city("Ronda", &["龙达", "Ronda"]),
];

/// Every known city, Chinese table first. Order matters: it breaks ties
/// between records whose longest aliases have equal length.
pub fn all_cities() -> impl Iterator<Item = &'static CityRecord> {
    CHINESE_CITIES.iter().chain(INTERNATIONAL_CITIES)
}

/// Country names that may be glued to a city alias, as in "西班牙格拉纳达".
pub const COUNTRY_PREFIXES: &[&str] = &[
    "西班牙",
    "意大利",
    "法国",
    "德国",
    "英国",
    "美国",
    "日本",
    "韩国",
    "泰国",
    "新加坡",
    "马来西亚",
    "澳大利亚",
    "加拿大",
    "俄罗斯",
    "荷兰",
    "比利时",
    "瑞士",
    "奥地利",
    "丹麦",
    "瑞典",
    "挪威",
    "芬兰",
    "spain",
    "italy",
    "france",
    "germany",
    "uk",
    "usa",
    "japan",
    "korea",
    "thailand",
    "singapore",
    "malaysia",
    "australia",
    "canada",
    "russia",
    "netherlands",
    "belgium",
    "switzerland",
    "austria",
    "denmark",
    "sweden",
    "norway",
    "finland",
];
