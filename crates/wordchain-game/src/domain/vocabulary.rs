//! Built-in Uzbek vocabulary used when no word file is configured.

/// Default word list.
pub const UZBEK_WORDS: &[&str] = &[
    "kitob", "bola", "ata", "ana", "bosh", "qo'l", "ko'z", "quloq", "burun", "og'iz",
    "tish", "til", "bo'yin", "qorin", "oyoq", "barmaq", "tirnoq", "soch", "yuz", "qosh",
    "kirpi", "it", "mushuk", "ot", "sigir", "qo'y", "echki", "tovuq", "o'rdak", "g'oz",
    "baliq", "qush", "hasharot", "kapalak", "chumoli", "ari", "chivin", "pashsha", "o'rgimchak",
    "qurt", "daraxt", "gul", "barg", "meva", "sabzavot", "piyoz", "sarimsoq", "pomidor",
    "bodring", "karam", "kartoshka", "sabzi", "qazi", "ismaloq", "qovun", "tarvuz", "uzum",
    "olma", "nok", "behi", "shaftoli", "o'rik", "gilos", "olcha", "anjir", "yong'oq", "bodom",
    "pista", "charxpalak", "qovurilgan", "non", "osh", "sho'rva", "manta", "somsa", "lag'mon",
    "chuchvara", "palov", "kabob", "tandir", "choy", "qahva", "suv", "sharbat", "kompot",
    "airan", "qatiq", "suzma", "tvorog", "qo'shimcha",
];
