use std::sync::LazyLock;

use newslens_common::BiasLabel;

// Marker phrases are matched against the lowercased text, not tokens, so
// multi-word markers count. Lists are register markers, not topic words:
// a phrase has to signal framing, not subject matter.
static LEFT_MARKERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "climate justice",
        "corporate greed",
        "gun violence epidemic",
        "income inequality",
        "living wage",
        "marginalized communities",
        "progressive",
        "social justice",
        "systemic racism",
        "undocumented immigrants",
        "universal healthcare",
        "workers' rights",
    ]
});

static RIGHT_MARKERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "big government",
        "border crisis",
        "family values",
        "free market",
        "government overreach",
        "illegal aliens",
        "job creators",
        "law and order",
        "radical left",
        "religious liberty",
        "second amendment rights",
        "tax burden",
    ]
});

/// How many more markers one side needs before the text leaves `center`.
const MARGIN: usize = 2;

/// Marker-phrase bias classification. Counts occurrences of each side's
/// phrases; a side must lead by at least `MARGIN` hits to win, otherwise
/// the text is labeled `center`.
pub fn classify_bias(text: &str) -> BiasLabel {
    let lowered = text.to_lowercase();

    let left: usize = LEFT_MARKERS.iter().map(|m| lowered.matches(m).count()).sum();
    let right: usize = RIGHT_MARKERS.iter().map(|m| lowered.matches(m).count()).sum();

    if left >= right + MARGIN {
        BiasLabel::Left
    } else if right >= left + MARGIN {
        BiasLabel::Right
    } else {
        BiasLabel::Center
    }
}
