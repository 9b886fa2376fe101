//! Fixed era interval table, Meiji onward.

/// One era: a name and an inclusive `[start, end]` date interval, with
/// bounds held as `(year, month, day)` triples. The current era has no
/// end.
pub(crate) struct EraSpan {
    pub(crate) name: &'static str,
    pub(crate) start: (i32, u8, u8),
    pub(crate) end: Option<(i32, u8, u8)>,
}

/// Eras from Meiji onward, oldest first. Intervals are contiguous and
/// non-overlapping: each era starts the day after its predecessor ends.
pub(crate) const ERA_TABLE: [EraSpan; 5] = [
    EraSpan {
        name: "明治",
        start: (1868, 1, 25),
        end: Some((1912, 7, 29)),
    },
    EraSpan {
        name: "大正",
        start: (1912, 7, 30),
        end: Some((1926, 12, 24)),
    },
    EraSpan {
        name: "昭和",
        start: (1926, 12, 25),
        end: Some((1989, 1, 7)),
    },
    EraSpan {
        name: "平成",
        start: (1989, 1, 8),
        end: Some((2019, 4, 30)),
    },
    EraSpan {
        name: "令和",
        start: (2019, 5, 1),
        end: None,
    },
];
