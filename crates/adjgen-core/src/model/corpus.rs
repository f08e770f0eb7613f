//! 組み込みの形容詞コーパス
//!
//! 「the future is ___」に当てはまる形容詞。9文字以下・小文字英字のみ。
//! 重みの構築（バイグラム統計）にだけ使い、生成時には参照しない。

/// 形容詞の一覧
pub const ADJECTIVES: &[&str] = &[
    "bleak", "bright", "beautiful", "scary", "exciting", "amazing", "expensive", "sunny",
    "hopeful", "absurd", "abundant", "alive", "ancient", "anxious", "ardent", "astral",
    "awake", "balanced", "blazing", "blessed", "blissful", "bold", "boundless", "brave",
    "brilliant", "broken", "calm", "candid", "careful", "certain", "charming", "cheerful",
    "chaotic", "clear", "clever", "cloudy", "cosmic", "crimson", "crowded", "curious",
    "daring", "dazzling", "distant", "divine", "dreamy", "electric", "elegant", "endless",
    "enormous", "eternal", "ethereal", "fearless", "fertile", "fierce", "fleeting", "fluid",
    "fragile", "free", "fresh", "friendly", "frozen", "gentle", "giant", "gilded", "glowing",
    "golden", "graceful", "grand", "green", "hazy", "healthy", "heavenly", "hidden", "hollow",
    "honest", "humble", "hungry", "infinite", "joyful", "kind", "lavish", "limitless",
    "liquid", "lively", "lonely", "loud", "lovely", "lucid", "lucky", "luminous", "magical",
    "majestic", "mellow", "mighty", "misty", "modern", "molten", "mythic", "narrow", "nimble",
    "noble", "odd", "open", "opulent", "peaceful", "perfect", "playful", "potent", "precious",
    "quiet", "radiant", "rapid", "rare", "restless", "rich", "robotic", "rosy", "sacred",
    "savage", "secret", "serene", "shiny", "silent", "silver", "simple", "sleek", "smart",
    "soft", "solar", "sparkling", "splendid", "stellar", "strange", "strong", "sublime",
    "subtle", "sweet", "swift", "tender", "thrilling", "tranquil", "unknown", "unwritten",
    "urgent", "vast", "velvet", "vibrant", "vivid", "warm", "weird", "wild", "wise",
    "wondrous", "young", "zealous",
];
