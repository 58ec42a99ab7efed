use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ImagePrediction {
    pub prediction: String,
    pub confidence: f64,
    #[serde(default)]
    pub advice: Advice,
    #[serde(default)]
    pub all_predictions: Option<BTreeMap<String, f64>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TabularPrediction {
    pub prediction: String,
    #[serde(default)]
    pub advice: Advice,
    #[serde(default)]
    pub features_used: Vec<String>,
}

impl ImagePrediction {
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }

    /// Per-class scores, highest first. Empty when the server sent none.
    pub fn ranked_scores(&self) -> Vec<(&str, f64)> {
        let mut scores: Vec<(&str, f64)> = self
            .all_predictions
            .iter()
            .flatten()
            .map(|(class, score)| (class.as_str(), *score))
            .collect();
        scores.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }
}

/// Renders a score in [0, 1] as a percentage with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Advice keyed by category, kept in the order the server sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advice(Vec<(String, String)>);

impl Advice {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Advice {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Advice(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for Advice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AdviceVisitor;

        impl<'de> Visitor<'de> for AdviceVisitor {
            type Value = Advice;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of advice category to text")
            }

            fn visit_unit<E>(self) -> Result<Advice, E> {
                Ok(Advice::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Advice, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, text)) = map.next_entry::<String, String>()? {
                    entries.push((category, text));
                }
                Ok(Advice(entries))
            }
        }

        deserializer.deserialize_any(AdviceVisitor)
    }
}
