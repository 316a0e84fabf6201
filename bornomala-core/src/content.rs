//! Static alphabet content: the letters, vocabulary, and praise phrases the
//! narrator reads aloud.
//!
//! All tables are `'static` data; nothing here allocates. Praise phrases
//! keep their decorative emoji — stripping them before speech is the
//! narrator's job, not the content's.

/// One vocabulary word tied to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub en: &'static str,
    pub bn: &'static str,
    pub emoji: &'static str,
}

/// A single alphabet entry.
#[derive(Debug, Clone, Copy)]
pub struct Letter {
    pub glyph: char,
    /// IPA pronunciation of the letter name.
    pub phonetic: &'static str,
    /// Spell-out pronunciation for speech engines that mangle single glyphs.
    pub spell_out: &'static str,
    /// Vocabulary words starting with this letter, most common first.
    pub words: &'static [Word],
    pub fact_en: &'static str,
    pub fact_bn: &'static str,
}

/// Look up a letter by glyph, case-insensitively.
pub fn letter(glyph: char) -> Option<&'static Letter> {
    let upper = glyph.to_ascii_uppercase();
    ALPHABET.iter().find(|l| l.glyph == upper)
}

pub static PRAISE_EN: [&str; 10] = [
    "Amazing! 🌟",
    "Brilliant! 💫",
    "Super! 🚀",
    "Fantastic! 🎉",
    "Great job! 🌈",
    "You rock! 🎸",
    "Wonderful! ✨",
    "Excellent! 🏆",
    "Outstanding! 🌠",
    "Superstar! ⭐",
];

pub static PRAISE_BN: [&str; 8] = [
    "অসাধারণ! 🌟",
    "চমৎকার! 💫",
    "দারুণ! 🚀",
    "অভূতপূর্ব! 🎉",
    "বাহ! 🌈",
    "তুমি রাজা! 🎸",
    "অপূর্ব! ✨",
    "খুব ভালো! 🏆",
];

pub static ALPHABET: [Letter; 26] = [
    Letter {
        glyph: 'A',
        phonetic: "eɪ",
        spell_out: "AY",
        words: &[
            Word { en: "Apple", bn: "আপেল", emoji: "🍎" },
            Word { en: "Ant", bn: "পিঁপড়া", emoji: "🐜" },
            Word { en: "Airplane", bn: "উড়োজাহাজ", emoji: "✈️" },
            Word { en: "Alligator", bn: "কুমির", emoji: "🐊" },
        ],
        fact_en: "A is the very first letter — the king of the alphabet! 👑",
        fact_bn: "A হল প্রথম অক্ষর — বর্ণমালার রাজা! 👑",
    },
    Letter {
        glyph: 'B',
        phonetic: "biː",
        spell_out: "BEE",
        words: &[
            Word { en: "Ball", bn: "বল", emoji: "⚽" },
            Word { en: "Bear", bn: "ভালুক", emoji: "🐻" },
            Word { en: "Butterfly", bn: "প্রজাপতি", emoji: "🦋" },
            Word { en: "Balloon", bn: "বেলুন", emoji: "🎈" },
        ],
        fact_en: "B has two big bumps on its belly! Count them!",
        fact_bn: "B-এর পেটে দুটো বড় ফোলা আছে! গুনে দেখো!",
    },
    Letter {
        glyph: 'C',
        phonetic: "siː",
        spell_out: "SEE",
        words: &[
            Word { en: "Cat", bn: "বিড়াল", emoji: "🐱" },
            Word { en: "Car", bn: "গাড়ি", emoji: "🚗" },
            Word { en: "Cake", bn: "কেক", emoji: "🎂" },
            Word { en: "Cloud", bn: "মেঘ", emoji: "☁️" },
        ],
        fact_en: "C looks like a mouth ready to eat a cookie! 🍪",
        fact_bn: "C দেখতে একটি মুখের মতো যা কুকি খেতে চায়!",
    },
    Letter {
        glyph: 'D',
        phonetic: "diː",
        spell_out: "DEE",
        words: &[
            Word { en: "Dog", bn: "কুকুর", emoji: "🐶" },
            Word { en: "Duck", bn: "হাঁস", emoji: "🦆" },
            Word { en: "Dolphin", bn: "ডলফিন", emoji: "🐬" },
            Word { en: "Diamond", bn: "হীরা", emoji: "💎" },
        ],
        fact_en: "D looks like a door — open it for adventure! 🚪",
        fact_bn: "D দেখতে একটি দরজার মতো — খুলে দেখো কী আছে!",
    },
    Letter {
        glyph: 'E',
        phonetic: "iː",
        spell_out: "EEE",
        words: &[
            Word { en: "Elephant", bn: "হাতি", emoji: "🐘" },
            Word { en: "Eagle", bn: "ঈগল", emoji: "🦅" },
            Word { en: "Earth", bn: "পৃথিবী", emoji: "🌍" },
            Word { en: "Egg", bn: "ডিম", emoji: "🥚" },
        ],
        fact_en: "Elephants start with E and never forget! 🐘",
        fact_bn: "হাতি শুরু হয় E দিয়ে এবং কখনো ভোলে না!",
    },
    Letter {
        glyph: 'F',
        phonetic: "ɛf",
        spell_out: "EFF",
        words: &[
            Word { en: "Fish", bn: "মাছ", emoji: "🐟" },
            Word { en: "Flower", bn: "ফুল", emoji: "🌸" },
            Word { en: "Frog", bn: "ব্যাঙ", emoji: "🐸" },
            Word { en: "Fire", bn: "আগুন", emoji: "🔥" },
        ],
        fact_en: "Frogs say ribbit — only YOU can say F! 🐸",
        fact_bn: "ব্যাঙ ডাকে কিন্তু F বলতে পারো শুধু তুমি!",
    },
    Letter {
        glyph: 'G',
        phonetic: "dʒiː",
        spell_out: "JEE",
        words: &[
            Word { en: "Giraffe", bn: "জিরাফ", emoji: "🦒" },
            Word { en: "Grape", bn: "আঙুর", emoji: "🍇" },
            Word { en: "Guitar", bn: "গিটার", emoji: "🎸" },
            Word { en: "Globe", bn: "গোলক", emoji: "🌐" },
        ],
        fact_en: "G has a little shelf inside it — fancy! 🦒",
        fact_bn: "G-এর ভেতরে একটি ছোট্ট তাক আছে — বেশ চমৎকার!",
    },
    Letter {
        glyph: 'H',
        phonetic: "eɪtʃ",
        spell_out: "AY-CH",
        words: &[
            Word { en: "Horse", bn: "ঘোড়া", emoji: "🐴" },
            Word { en: "House", bn: "বাড়ি", emoji: "🏠" },
            Word { en: "Heart", bn: "হৃদয়", emoji: "❤️" },
            Word { en: "Hat", bn: "টুপি", emoji: "🎩" },
        ],
        fact_en: "H looks like a ladder — let's climb up! 🪜",
        fact_bn: "H দেখতে একটি মই-এর মতো — উঠে যাও উপরে!",
    },
    Letter {
        glyph: 'I',
        phonetic: "aɪ",
        spell_out: "EYE",
        words: &[
            Word { en: "Ice Cream", bn: "আইসক্রিম", emoji: "🍦" },
            Word { en: "Island", bn: "দ্বীপ", emoji: "🏝️" },
            Word { en: "Insect", bn: "পোকামাকড়", emoji: "🐛" },
            Word { en: "Igloo", bn: "ইগলু", emoji: "🏔️" },
        ],
        fact_en: "I stands tall and straight — just like you! 🧍",
        fact_bn: "I লম্বা হয়ে দাঁড়ায় — ঠিক তোমার মতো!",
    },
    Letter {
        glyph: 'J',
        phonetic: "dʒeɪ",
        spell_out: "JAY",
        words: &[
            Word { en: "Jaguar", bn: "জাগুয়ার", emoji: "🐆" },
            Word { en: "Jellyfish", bn: "জেলিফিশ", emoji: "🪼" },
            Word { en: "Jar", bn: "বয়াম", emoji: "🫙" },
            Word { en: "Juice", bn: "জুস", emoji: "🧃" },
        ],
        fact_en: "J has a little hook — like a fishing rod! 🎣",
        fact_bn: "J-এর একটি ছোট্ট বাঁক আছে — মাছ ধরার ছিপের মতো!",
    },
    Letter {
        glyph: 'K',
        phonetic: "keɪ",
        spell_out: "KAY",
        words: &[
            Word { en: "Kangaroo", bn: "ক্যাঙারু", emoji: "🦘" },
            Word { en: "Kite", bn: "ঘুড়ি", emoji: "🪁" },
            Word { en: "Koala", bn: "কোয়ালা", emoji: "🐨" },
            Word { en: "Key", bn: "চাবি", emoji: "🔑" },
        ],
        fact_en: "Kangaroos carry their babies in a pocket! 🦘",
        fact_bn: "ক্যাঙারু তার বাচ্চাকে পেটের থলিতে বহন করে!",
    },
    Letter {
        glyph: 'L',
        phonetic: "ɛl",
        spell_out: "ELL",
        words: &[
            Word { en: "Lion", bn: "সিংহ", emoji: "🦁" },
            Word { en: "Lemon", bn: "লেবু", emoji: "🍋" },
            Word { en: "Lamp", bn: "বাতি", emoji: "💡" },
            Word { en: "Leaf", bn: "পাতা", emoji: "🍃" },
        ],
        fact_en: "L looks like someone sitting on the floor! 🧘",
        fact_bn: "L দেখতে মাটিতে বসে থাকা কারো মতো!",
    },
    Letter {
        glyph: 'M',
        phonetic: "ɛm",
        spell_out: "EMM",
        words: &[
            Word { en: "Moon", bn: "চাঁদ", emoji: "🌙" },
            Word { en: "Monkey", bn: "বানর", emoji: "🐒" },
            Word { en: "Mango", bn: "আম", emoji: "🥭" },
            Word { en: "Mushroom", bn: "মাশরুম", emoji: "🍄" },
        ],
        fact_en: "M looks like two mountains! Can you see them? 🏔️🏔️",
        fact_bn: "M দেখতে দুটো পাহাড়ের মতো! দেখতে পাচ্ছো?",
    },
    Letter {
        glyph: 'N',
        phonetic: "ɛn",
        spell_out: "ENN",
        words: &[
            Word { en: "Nest", bn: "বাসা", emoji: "🪹" },
            Word { en: "Nose", bn: "নাক", emoji: "👃" },
            Word { en: "Night", bn: "রাত", emoji: "🌃" },
            Word { en: "Narwhal", bn: "নারহোয়াল", emoji: "🐋" },
        ],
        fact_en: "N has a diagonal slide between two poles! Wheee! 🎢",
        fact_bn: "N-এ দুটো খুঁটির মাঝে একটি পিচ্ছিল পথ আছে!",
    },
    Letter {
        glyph: 'O',
        phonetic: "oʊ",
        spell_out: "OH",
        words: &[
            Word { en: "Owl", bn: "পেঁচা", emoji: "🦉" },
            Word { en: "Orange", bn: "কমলা", emoji: "🍊" },
            Word { en: "Ocean", bn: "সমুদ্র", emoji: "🌊" },
            Word { en: "Octopus", bn: "অক্টোপাস", emoji: "🐙" },
        ],
        fact_en: "O is a perfect circle — like the sun and moon! 🌕",
        fact_bn: "O একটি নিখুঁত বৃত্ত — সূর্য ও চাঁদের মতো!",
    },
    Letter {
        glyph: 'P',
        phonetic: "piː",
        spell_out: "PEE",
        words: &[
            Word { en: "Penguin", bn: "পেঙ্গুইন", emoji: "🐧" },
            Word { en: "Pizza", bn: "পিৎজা", emoji: "🍕" },
            Word { en: "Parrot", bn: "টিয়া", emoji: "🦜" },
            Word { en: "Panda", bn: "পান্ডা", emoji: "🐼" },
        ],
        fact_en: "P has one belly — B has two! Spot the difference! 👀",
        fact_bn: "P-এর একটি পেট আছে — B-এর দুটো! পার্থক্য দেখো!",
    },
    Letter {
        glyph: 'Q',
        phonetic: "kjuː",
        spell_out: "KYOO",
        words: &[
            Word { en: "Queen", bn: "রানী", emoji: "👸" },
            Word { en: "Quail", bn: "কোয়েল", emoji: "🐦" },
            Word { en: "Quarter", bn: "চতুর্থাংশ", emoji: "🪙" },
            Word { en: "Quiz", bn: "প্রশ্নোত্তর", emoji: "❓" },
        ],
        fact_en: "Q always brings its best friend U along! 👯",
        fact_bn: "Q সবসময় তার বন্ধু U-কে সাথে নিয়ে আসে!",
    },
    Letter {
        glyph: 'R',
        phonetic: "ɑːr",
        spell_out: "AR",
        words: &[
            Word { en: "Rainbow", bn: "রংধনু", emoji: "🌈" },
            Word { en: "Rabbit", bn: "খরগোশ", emoji: "🐰" },
            Word { en: "Rocket", bn: "রকেট", emoji: "🚀" },
            Word { en: "Robot", bn: "রোবট", emoji: "🤖" },
        ],
        fact_en: "Rainbows start with R — nature's colorful painting! 🌈",
        fact_bn: "রংধনু শুরু হয় R দিয়ে — প্রকৃতির রঙিন ছবি!",
    },
    Letter {
        glyph: 'S',
        phonetic: "ɛs",
        spell_out: "ESS",
        words: &[
            Word { en: "Sun", bn: "সূর্য", emoji: "☀️" },
            Word { en: "Star", bn: "তারা", emoji: "⭐" },
            Word { en: "Snake", bn: "সাপ", emoji: "🐍" },
            Word { en: "Strawberry", bn: "স্ট্রবেরি", emoji: "🍓" },
        ],
        fact_en: "S wiggles like a snake — ssssss! 🐍",
        fact_bn: "S সাপের মতো আঁকাবাঁকা — সসসস!",
    },
    Letter {
        glyph: 'T',
        phonetic: "tiː",
        spell_out: "TEE",
        words: &[
            Word { en: "Tiger", bn: "বাঘ", emoji: "🐯" },
            Word { en: "Train", bn: "ট্রেন", emoji: "🚂" },
            Word { en: "Turtle", bn: "কচ্ছপ", emoji: "🐢" },
            Word { en: "Tree", bn: "গাছ", emoji: "🌳" },
        ],
        fact_en: "T stands with arms wide open — ready for a hug! 🙆",
        fact_bn: "T দুই বাহু ছড়িয়ে দাঁড়ায় — জড়িয়ে ধরতে চায়!",
    },
    Letter {
        glyph: 'U',
        phonetic: "juː",
        spell_out: "YOU",
        words: &[
            Word { en: "Umbrella", bn: "ছাতা", emoji: "☂️" },
            Word { en: "Unicorn", bn: "এককর্ণ", emoji: "🦄" },
            Word { en: "Universe", bn: "মহাবিশ্ব", emoji: "🌌" },
            Word { en: "Urchin", bn: "আর্চিন", emoji: "🦔" },
        ],
        fact_en: "U is shaped like a cup — what would you put in it? 🥤",
        fact_bn: "U দেখতে একটি কাপের মতো — এতে কী রাখবে?",
    },
    Letter {
        glyph: 'V',
        phonetic: "viː",
        spell_out: "VEE",
        words: &[
            Word { en: "Volcano", bn: "আগ্নেয়গিরি", emoji: "🌋" },
            Word { en: "Violin", bn: "বেহালা", emoji: "🎻" },
            Word { en: "Violet", bn: "বেগুনি", emoji: "💜" },
            Word { en: "Viking", bn: "ভাইকিং", emoji: "⚔️" },
        ],
        fact_en: "V is shaped like a valley between two mountains! 🏔️",
        fact_bn: "V দুটো পাহাড়ের মাঝের উপত্যকার মতো দেখতে!",
    },
    Letter {
        glyph: 'W',
        phonetic: "dʌbljuː",
        spell_out: "DUB-UL-YOO",
        words: &[
            Word { en: "Whale", bn: "তিমি", emoji: "🐋" },
            Word { en: "Wolf", bn: "নেকড়া", emoji: "🐺" },
            Word { en: "Watermelon", bn: "তরমুজ", emoji: "🍉" },
            Word { en: "Worm", bn: "কেঁচো", emoji: "🪱" },
        ],
        fact_en: "W is two V's joined — a super double V! 💪",
        fact_bn: "W হলো দুটো V জোড়া লাগানো — সুপার ডবল V!",
    },
    Letter {
        glyph: 'X',
        phonetic: "ɛks",
        spell_out: "EX",
        words: &[
            Word { en: "Xylophone", bn: "জাইলোফোন", emoji: "🎵" },
            Word { en: "X-Ray", bn: "এক্স-রে", emoji: "🩻" },
            Word { en: "Fox", bn: "শেয়াল", emoji: "🦊" },
            Word { en: "Box", bn: "বাক্স", emoji: "📦" },
        ],
        fact_en: "X marks the spot on a treasure map! 🗺️💰",
        fact_bn: "X চিহ্ন মানেই গুপ্তধনের জায়গা!",
    },
    Letter {
        glyph: 'Y',
        phonetic: "waɪ",
        spell_out: "WHY",
        words: &[
            Word { en: "Yak", bn: "ইয়াক", emoji: "🦬" },
            Word { en: "Yacht", bn: "ইয়ট", emoji: "⛵" },
            Word { en: "Yarn", bn: "সুতা", emoji: "🧶" },
            Word { en: "Yo-Yo", bn: "ইয়ো-ইয়ো", emoji: "🪀" },
        ],
        fact_en: "Y always asks Why, why, why? Curious like you! 🤔",
        fact_bn: "Y সবসময় জিজ্ঞেস করে কেন, কেন, কেন? তোমার মতো কৌতূহলী!",
    },
    Letter {
        glyph: 'Z',
        phonetic: "ziː",
        spell_out: "ZEE",
        words: &[
            Word { en: "Zebra", bn: "জেব্রা", emoji: "🦓" },
            Word { en: "Zoo", bn: "চিড়িয়াখানা", emoji: "🏛️" },
            Word { en: "Zigzag", bn: "জিগজাগ", emoji: "⚡" },
            Word { en: "Zero", bn: "শূন্য", emoji: "0️⃣" },
        ],
        fact_en: "Z is last but zebras are wonderfully unique! 🦓",
        fact_bn: "Z শেষে আসে কিন্তু জেব্রা অসাধারণ অনন্য!",
    },
];
