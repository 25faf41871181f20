use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::{Address, Pricing};

/// Public professional profile as returned by discovery endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub preferred_name: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub regulatory_body: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: u32,
}

impl Professional {
    pub fn display_name(&self) -> &str {
        self.preferred_name.as_deref().unwrap_or(&self.name)
    }

    /// Cheapest offered modality, for the "starting at" price tag.
    pub fn min_price(&self) -> Option<f64> {
        let pricing = self.pricing.as_ref()?;
        [pricing.online, pricing.in_person, pricing.home]
            .into_iter()
            .flatten()
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_price_spans_all_modalities() {
        let prof = Professional {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            preferred_name: None,
            profession: None,
            specialties: vec![],
            regulatory_body: None,
            registration_number: None,
            address: None,
            pricing: Some(Pricing {
                online: Some(180.0),
                in_person: Some(120.0),
                home: None,
                ..Default::default()
            }),
            description: None,
            photo_url: None,
            average_rating: None,
            total_reviews: 0,
        };
        assert_eq!(prof.min_price(), Some(120.0));
    }

    #[test]
    fn min_price_absent_without_pricing() {
        let mut prof: Professional = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Ana"
        }))
        .unwrap();
        assert_eq!(prof.min_price(), None);
        prof.pricing = Some(Pricing::default());
        assert_eq!(prof.min_price(), None);
    }
}
