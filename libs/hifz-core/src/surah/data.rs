//! Canonical surah metadata (Hafs numbering, standard Juz boundaries).

use super::{JuzMembership, Revelation, Surah};

use super::Revelation::{Meccan, Medinan};

type Entry = (u32, &'static str, &'static str, &'static str, u32, Revelation, &'static [u8]);

#[rustfmt::skip]
const SURAHS: [Entry; 114] = [
    (1, "الفاتحة", "Al-Fatihah", "The Opener", 7, Meccan, &[1]),
    (2, "البقرة", "Al-Baqarah", "The Cow", 286, Medinan, &[1, 2, 3]),
    (3, "آل عمران", "Ali 'Imran", "Family of Imran", 200, Medinan, &[3, 4]),
    (4, "النساء", "An-Nisa", "The Women", 176, Medinan, &[4, 5, 6]),
    (5, "المائدة", "Al-Ma'idah", "The Table Spread", 120, Medinan, &[6, 7]),
    (6, "الأنعام", "Al-An'am", "The Cattle", 165, Meccan, &[7, 8]),
    (7, "الأعراف", "Al-A'raf", "The Heights", 206, Meccan, &[8, 9]),
    (8, "الأنفال", "Al-Anfal", "The Spoils of War", 75, Medinan, &[9, 10]),
    (9, "التوبة", "At-Tawbah", "The Repentance", 129, Medinan, &[10, 11]),
    (10, "يونس", "Yunus", "Jonah", 109, Meccan, &[11]),
    (11, "هود", "Hud", "Hud", 123, Meccan, &[11, 12]),
    (12, "يوسف", "Yusuf", "Joseph", 111, Meccan, &[12, 13]),
    (13, "الرعد", "Ar-Ra'd", "The Thunder", 43, Medinan, &[13]),
    (14, "إبراهيم", "Ibrahim", "Abraham", 52, Meccan, &[13]),
    (15, "الحجر", "Al-Hijr", "The Rocky Tract", 99, Meccan, &[14]),
    (16, "النحل", "An-Nahl", "The Bee", 128, Meccan, &[14]),
    (17, "الإسراء", "Al-Isra", "The Night Journey", 111, Meccan, &[15]),
    (18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan, &[15, 16]),
    (19, "مريم", "Maryam", "Mary", 98, Meccan, &[16]),
    (20, "طه", "Taha", "Ta-Ha", 135, Meccan, &[16]),
    (21, "الأنبياء", "Al-Anbya", "The Prophets", 112, Meccan, &[17]),
    (22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan, &[17]),
    (23, "المؤمنون", "Al-Mu'minun", "The Believers", 118, Meccan, &[18]),
    (24, "النور", "An-Nur", "The Light", 64, Medinan, &[18]),
    (25, "الفرقان", "Al-Furqan", "The Criterion", 77, Meccan, &[18, 19]),
    (26, "الشعراء", "Ash-Shu'ara", "The Poets", 227, Meccan, &[19]),
    (27, "النمل", "An-Naml", "The Ant", 93, Meccan, &[19, 20]),
    (28, "القصص", "Al-Qasas", "The Stories", 88, Meccan, &[20]),
    (29, "العنكبوت", "Al-'Ankabut", "The Spider", 69, Meccan, &[20, 21]),
    (30, "الروم", "Ar-Rum", "The Romans", 60, Meccan, &[21]),
    (31, "لقمان", "Luqman", "Luqman", 34, Meccan, &[21]),
    (32, "السجدة", "As-Sajdah", "The Prostration", 30, Meccan, &[21]),
    (33, "الأحزاب", "Al-Ahzab", "The Combined Forces", 73, Medinan, &[21, 22]),
    (34, "سبإ", "Saba", "Sheba", 54, Meccan, &[22]),
    (35, "فاطر", "Fatir", "Originator", 45, Meccan, &[22]),
    (36, "يس", "Ya-Sin", "Ya Sin", 83, Meccan, &[22, 23]),
    (37, "الصافات", "As-Saffat", "Those who set the Ranks", 182, Meccan, &[23]),
    (38, "ص", "Sad", "The Letter Saad", 88, Meccan, &[23]),
    (39, "الزمر", "Az-Zumar", "The Troops", 75, Meccan, &[23, 24]),
    (40, "غافر", "Ghafir", "The Forgiver", 85, Meccan, &[24]),
    (41, "فصلت", "Fussilat", "Explained in Detail", 54, Meccan, &[24, 25]),
    (42, "الشورى", "Ash-Shuraa", "The Consultation", 53, Meccan, &[25]),
    (43, "الزخرف", "Az-Zukhruf", "The Ornaments of Gold", 89, Meccan, &[25]),
    (44, "الدخان", "Ad-Dukhan", "The Smoke", 59, Meccan, &[25]),
    (45, "الجاثية", "Al-Jathiyah", "The Crouching", 37, Meccan, &[25]),
    (46, "الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills", 35, Meccan, &[26]),
    (47, "محمد", "Muhammad", "Muhammad", 38, Medinan, &[26]),
    (48, "الفتح", "Al-Fath", "The Victory", 29, Medinan, &[26]),
    (49, "الحجرات", "Al-Hujurat", "The Rooms", 18, Medinan, &[26]),
    (50, "ق", "Qaf", "The Letter Qaf", 45, Meccan, &[26]),
    (51, "الذاريات", "Adh-Dhariyat", "The Winnowing Winds", 60, Meccan, &[26, 27]),
    (52, "الطور", "At-Tur", "The Mount", 49, Meccan, &[27]),
    (53, "النجم", "An-Najm", "The Star", 62, Meccan, &[27]),
    (54, "القمر", "Al-Qamar", "The Moon", 55, Meccan, &[27]),
    (55, "الرحمن", "Ar-Rahman", "The Beneficent", 78, Medinan, &[27]),
    (56, "الواقعة", "Al-Waqi'ah", "The Inevitable", 96, Meccan, &[27]),
    (57, "الحديد", "Al-Hadid", "The Iron", 29, Medinan, &[27]),
    (58, "المجادلة", "Al-Mujadila", "The Pleading Woman", 22, Medinan, &[28]),
    (59, "الحشر", "Al-Hashr", "The Exile", 24, Medinan, &[28]),
    (60, "الممتحنة", "Al-Mumtahanah", "She that is to be examined", 13, Medinan, &[28]),
    (61, "الصف", "As-Saf", "The Ranks", 14, Medinan, &[28]),
    (62, "الجمعة", "Al-Jumu'ah", "The Congregation, Friday", 11, Medinan, &[28]),
    (63, "المنافقون", "Al-Munafiqun", "The Hypocrites", 11, Medinan, &[28]),
    (64, "التغابن", "At-Taghabun", "The Mutual Disillusion", 18, Medinan, &[28]),
    (65, "الطلاق", "At-Talaq", "The Divorce", 12, Medinan, &[28]),
    (66, "التحريم", "At-Tahrim", "The Prohibition", 12, Medinan, &[28]),
    (67, "الملك", "Al-Mulk", "The Sovereignty", 30, Meccan, &[29]),
    (68, "القلم", "Al-Qalam", "The Pen", 52, Meccan, &[29]),
    (69, "الحاقة", "Al-Haqqah", "The Reality", 52, Meccan, &[29]),
    (70, "المعارج", "Al-Ma'arij", "The Ascending Stairways", 44, Meccan, &[29]),
    (71, "نوح", "Nuh", "Noah", 28, Meccan, &[29]),
    (72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan, &[29]),
    (73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20, Meccan, &[29]),
    (74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56, Meccan, &[29]),
    (75, "القيامة", "Al-Qiyamah", "The Resurrection", 40, Meccan, &[29]),
    (76, "الإنسان", "Al-Insan", "The Man", 31, Medinan, &[29]),
    (77, "المرسلات", "Al-Mursalat", "The Emissaries", 50, Meccan, &[29]),
    (78, "النبإ", "An-Naba", "The Tidings", 40, Meccan, &[30]),
    (79, "النازعات", "An-Nazi'at", "Those who drag forth", 46, Meccan, &[30]),
    (80, "عبس", "'Abasa", "He Frowned", 42, Meccan, &[30]),
    (81, "التكوير", "At-Takwir", "The Overthrowing", 29, Meccan, &[30]),
    (82, "الإنفطار", "Al-Infitar", "The Cleaving", 19, Meccan, &[30]),
    (83, "المطففين", "Al-Mutaffifin", "The Defrauding", 36, Meccan, &[30]),
    (84, "الإنشقاق", "Al-Inshiqaq", "The Sundering", 25, Meccan, &[30]),
    (85, "البروج", "Al-Buruj", "The Mansions of the Stars", 22, Meccan, &[30]),
    (86, "الطارق", "At-Tariq", "The Nightcommer", 17, Meccan, &[30]),
    (87, "الأعلى", "Al-A'la", "The Most High", 19, Meccan, &[30]),
    (88, "الغاشية", "Al-Ghashiyah", "The Overwhelming", 26, Meccan, &[30]),
    (89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan, &[30]),
    (90, "البلد", "Al-Balad", "The City", 20, Meccan, &[30]),
    (91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan, &[30]),
    (92, "الليل", "Al-Layl", "The Night", 21, Meccan, &[30]),
    (93, "الضحى", "Ad-Duhaa", "The Morning Hours", 11, Meccan, &[30]),
    (94, "الشرح", "Ash-Sharh", "The Relief", 8, Meccan, &[30]),
    (95, "التين", "At-Tin", "The Fig", 8, Meccan, &[30]),
    (96, "العلق", "Al-'Alaq", "The Clot", 19, Meccan, &[30]),
    (97, "القدر", "Al-Qadr", "The Power", 5, Meccan, &[30]),
    (98, "البينة", "Al-Bayyinah", "The Clear Proof", 8, Medinan, &[30]),
    (99, "الزلزلة", "Az-Zalzalah", "The Earthquake", 8, Medinan, &[30]),
    (100, "العاديات", "Al-'Adiyat", "The Courser", 11, Meccan, &[30]),
    (101, "القارعة", "Al-Qari'ah", "The Calamity", 11, Meccan, &[30]),
    (102, "التكاثر", "At-Takathur", "The Rivalry in World Increase", 8, Meccan, &[30]),
    (103, "العصر", "Al-'Asr", "The Declining Day", 3, Meccan, &[30]),
    (104, "الهمزة", "Al-Humazah", "The Traducer", 9, Meccan, &[30]),
    (105, "الفيل", "Al-Fil", "The Elephant", 5, Meccan, &[30]),
    (106, "قريش", "Quraysh", "Quraysh", 4, Meccan, &[30]),
    (107, "الماعون", "Al-Ma'un", "The Small Kindnesses", 7, Meccan, &[30]),
    (108, "الكوثر", "Al-Kawthar", "The Abundance", 3, Meccan, &[30]),
    (109, "الكافرون", "Al-Kafirun", "The Disbelievers", 6, Meccan, &[30]),
    (110, "النصر", "An-Nasr", "The Divine Support", 3, Medinan, &[30]),
    (111, "المسد", "Al-Masad", "The Palm Fiber", 5, Meccan, &[30]),
    (112, "الإخلاص", "Al-Ikhlas", "The Sincerity", 4, Meccan, &[30]),
    (113, "الفلق", "Al-Falaq", "The Daybreak", 5, Meccan, &[30]),
    (114, "الناس", "An-Nas", "Mankind", 6, Meccan, &[30]),
];

pub(super) fn standard_surahs() -> Vec<Surah> {
    SURAHS
        .iter()
        .map(|&(id, name, transliteration, translation, total_ayahs, revelation, juz)| Surah {
            id,
            name: name.to_string(),
            transliteration: transliteration.to_string(),
            translation: translation.to_string(),
            total_ayahs,
            revelation,
            juz: match juz {
                [single] => JuzMembership::Single(*single),
                span => JuzMembership::Span(span.to_vec()),
            },
        })
        .collect()
}
