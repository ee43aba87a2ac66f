use serde::Serialize;

/// Static service descriptor consulted by callers for routing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: &'static str,
    pub url: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub disabled: bool,
    pub domains: &'static [&'static str],
}

pub fn get_info() -> ServiceInfo {
    ServiceInfo {
        name: "Mangabat",
        url: "https://mangabat.com",
        image_url: "image.jpg",
        description: "",
        disabled: false,
        domains: &["mangabat.com", "readmangabat.com", "h.mangabat.com"],
    }
}
