use serde::{Deserialize, Serialize};

// Wire shapes match the admin app's JSON: camelCase keys, optional fields
// defaulted at deserialization instead of merged in ad hoc.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub category_id: String,
    #[serde(default)]
    pub service_ids: Vec<String>,
    #[serde(default)]
    pub number: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStage {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Category id or free-text label, depending on how the entry was curated.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub process: Vec<ProcessStage>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub number: i64,
}

/// Read-only view: a subcategory with its services resolved and sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSubcategory {
    #[serde(flatten)]
    pub subcategory: Subcategory,
    pub services: Vec<Service>,
}

/// Read-only view: a category with its resolved subcategory tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCategory {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<ResolvedSubcategory>,
}

/// Landing-page shortlist entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularService {
    pub title: String,
    pub icon: String,
    pub link: String,
}
