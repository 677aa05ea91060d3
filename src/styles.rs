// styles.rs
// Display decoration for types and stats. The tables are plain data owned by
// whoever composes details, so tests can hand in their own.

use std::collections::HashMap;

use crate::model::{Stat, Weakness};

pub const FALLBACK_COLOR: &str = "#ccc";
pub const FALLBACK_STAT_CODE: &str = "?";
pub const TOTAL_CODE: &str = "TOT";
pub const TOTAL_NAME: &str = "Total";
pub const TOTAL_COLOR: &str = "#7195dc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStyle {
    pub background: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatStyle {
    pub code: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct StyleTables {
    types: HashMap<String, TypeStyle>,
    stats: HashMap<String, StatStyle>,
    total: StatStyle,
}

const TYPE_BACKGROUNDS: [(&str, &str); 18] = [
    ("bug", "#92BC2C"),
    ("dark", "#595761"),
    ("dragon", "#0C69C8"),
    ("electric", "#F2D94E"),
    ("fire", "#FBA54C"),
    ("fairy", "#EE90E6"),
    ("fighting", "#D3425F"),
    ("flying", "#A1BBEC"),
    ("ghost", "#5F6DBC"),
    ("grass", "#5FBD58"),
    ("ground", "#DA7C4D"),
    ("ice", "#75D0C1"),
    ("normal", "#A0A29F"),
    ("poison", "#B763CF"),
    ("psychic", "#FA8581"),
    ("rock", "#C9BB8A"),
    ("steel", "#5695A3"),
    ("water", "#539DDF"),
];

const STAT_STYLES: [(&str, &str, &str); 6] = [
    ("hp", "HP", "#df2140"),
    ("attack", "ATK", "#ff994d"),
    ("defense", "DEF", "#ffdc41"),
    ("special-attack", "SpA", "#85ddff"),
    ("special-defense", "SpD", "#a8ef95"),
    ("speed", "SPD", "#fb94a8"),
];

impl Default for StyleTables {
    fn default() -> Self {
        let types = TYPE_BACKGROUNDS
            .iter()
            .map(|(name, background)| {
                (
                    name.to_string(),
                    TypeStyle {
                        background: background.to_string(),
                        icon: format!("/assets/icon/types/{}.svg", name),
                    },
                )
            })
            .collect();
        let stats = STAT_STYLES
            .iter()
            .map(|(name, code, color)| {
                (
                    name.to_string(),
                    StatStyle {
                        code: code.to_string(),
                        color: color.to_string(),
                    },
                )
            })
            .collect();
        Self::new(
            types,
            stats,
            StatStyle {
                code: TOTAL_CODE.to_string(),
                color: TOTAL_COLOR.to_string(),
            },
        )
    }
}

impl StyleTables {
    pub fn new(
        types: HashMap<String, TypeStyle>,
        stats: HashMap<String, StatStyle>,
        total: StatStyle,
    ) -> Self {
        Self { types, stats, total }
    }

    pub fn type_style(&self, type_name: &str) -> Option<&TypeStyle> {
        self.types.get(type_name)
    }

    /// Decorates a weakness; unknown types get the gray fallback and no icon.
    pub fn weakness(&self, type_name: &str) -> Weakness {
        match self.types.get(type_name) {
            Some(style) => Weakness {
                name: type_name.to_string(),
                background: style.background.clone(),
                icon: Some(style.icon.clone()),
            },
            None => {
                tracing::debug!("No style for type {}, using fallback", type_name);
                Weakness {
                    name: type_name.to_string(),
                    background: FALLBACK_COLOR.to_string(),
                    icon: None,
                }
            }
        }
    }

    pub fn stat(&self, stat_name: &str, value: u32) -> Stat {
        let (code, color) = match self.stats.get(stat_name) {
            Some(style) => (style.code.clone(), style.color.clone()),
            None => (FALLBACK_STAT_CODE.to_string(), FALLBACK_COLOR.to_string()),
        };
        Stat {
            code,
            name: stat_name.to_string(),
            color,
            value,
        }
    }

    pub fn total(&self, value: u32) -> Stat {
        Stat {
            code: self.total.code.clone(),
            name: TOTAL_NAME.to_string(),
            color: self.total.color.clone(),
            value,
        }
    }
}
