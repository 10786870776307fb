use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct PackagesData {
    pub(crate) packages: Option<Vec<WirePackage>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePackage {
    pub(crate) short_name: Option<String>,
    pub(crate) clear_name: Option<String>,
}
