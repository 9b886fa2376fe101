//! Fixed month/day holiday table.

/// Holidays observed on the same month/day every year, as
/// `(month, day, name)` triples in chronological order.
pub(crate) const FIXED_HOLIDAYS: [(u8, u8, &str); 10] = [
    (1, 1, "元日"),        // New Year's Day
    (2, 11, "建国記念の日"), // National Foundation Day
    (2, 23, "天皇誕生日"),   // Emperor's Birthday
    (4, 29, "昭和の日"),     // Showa Day
    (5, 3, "憲法記念日"),    // Constitution Day
    (5, 4, "みどりの日"),    // Greenery Day
    (5, 5, "こどもの日"),    // Children's Day
    (8, 11, "山の日"),       // Mountain Day
    (11, 3, "文化の日"),     // Culture Day
    (11, 23, "勤労感謝の日"), // Labor Thanksgiving Day
];
