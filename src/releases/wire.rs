use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewTitlesData {
    #[serde(rename = "newTitles")]
    pub(crate) new_titles: Option<NewTitlesConnection>,
}

#[derive(Deserialize)]
pub(crate) struct NewTitlesConnection {
    #[serde(default)]
    pub(crate) edges: Vec<WireEdge>,
}

#[derive(Deserialize)]
pub(crate) struct WireEdge {
    #[serde(rename = "newOffer")]
    pub(crate) new_offer: Option<WireOffer>,
    pub(crate) node: Option<WireNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireOffer {
    // The API spells this one with a capitalized URL suffix.
    #[serde(rename = "standardWebURL")]
    pub(crate) standard_web_url: Option<String>,
    pub(crate) package: Option<WirePackage>,
    pub(crate) monetization_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePackage {
    pub(crate) short_name: Option<String>,
    pub(crate) clear_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireNode {
    pub(crate) object_id: Option<i64>,
    pub(crate) content: Option<WireContent>,
    // Season-only selections from the inline fragment.
    pub(crate) total_episode_count: Option<u32>,
    pub(crate) show: Option<WireShow>,
    #[serde(rename = "__typename")]
    pub(crate) typename: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireContent {
    pub(crate) title: Option<String>,
    pub(crate) full_path: Option<String>,
    pub(crate) poster_url: Option<String>,
    pub(crate) original_release_year: Option<i32>,
    pub(crate) scoring: Option<WireScoring>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireScoring {
    pub(crate) imdb_score: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct WireShow {
    pub(crate) content: Option<WireShowContent>,
}

#[derive(Deserialize)]
pub(crate) struct WireShowContent {
    pub(crate) title: Option<String>,
}
