//! Play-statistics presentation config.
//!
//! One table entry per stat field: label, tooltip, render format, and whether
//! the value gets a threshold color. Extending the stats display means adding
//! a row here.

use crate::authors::{adp_color, draw_play_rate_color};
use crate::core::StatBlock;

/// The four stat fields a stats provider may supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Play Win Rate
    Pwr,
    /// Average Draft Position
    Adp,
    /// Average Play Round
    Apr,
    /// Rate of playing a card after drawing it
    DrawPlayRate,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Pwr,
        StatKind::Adp,
        StatKind::Apr,
        StatKind::DrawPlayRate,
    ];

    /// Field value from a stat block
    pub fn value(&self, block: &StatBlock) -> Option<f64> {
        match self {
            StatKind::Pwr => block.pwr,
            StatKind::Adp => block.adp,
            StatKind::Apr => block.apr,
            StatKind::DrawPlayRate => block.draw_play_rate,
        }
    }

    pub fn config(&self) -> &'static StatConfig {
        &STAT_CONFIGS[match self {
            StatKind::Pwr => 0,
            StatKind::Adp => 1,
            StatKind::Apr => 2,
            StatKind::DrawPlayRate => 3,
        }]
    }
}

/// How to render one stat field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Fixed-precision decimal
    Decimal(usize),
    /// Whole percent
    Percent,
}

#[derive(Debug, Clone, Copy)]
pub struct StatConfig {
    pub kind: StatKind,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub format: StatFormat,
    pub has_color: bool,
}

pub const STAT_CONFIGS: [StatConfig; 4] = [
    StatConfig {
        kind: StatKind::Pwr,
        label: "PWR",
        tooltip: "Play Win Rate: Play Rate × Win Rate / 7",
        format: StatFormat::Decimal(2),
        has_color: false,
    },
    StatConfig {
        kind: StatKind::Adp,
        label: "ADP",
        tooltip: "Average Draft Position",
        format: StatFormat::Decimal(2),
        has_color: true,
    },
    StatConfig {
        kind: StatKind::Apr,
        label: "APR",
        tooltip: "Average Play Round",
        format: StatFormat::Decimal(2),
        has_color: false,
    },
    StatConfig {
        kind: StatKind::DrawPlayRate,
        label: "Play Rate",
        tooltip: "Draw Play Rate: Rate of playing after drawing",
        format: StatFormat::Percent,
        has_color: true,
    },
];

/// Render a stat value per its config
pub fn format_stat(kind: StatKind, value: f64) -> String {
    match kind.config().format {
        StatFormat::Decimal(decimals) => format!("{:.*}", decimals, value),
        StatFormat::Percent => format!("{}%", (value * 100.0).round() as i64),
    }
}

/// Threshold color for a stat value, for the fields that carry one
pub fn stat_color(kind: StatKind, value: f64) -> Option<&'static str> {
    match kind {
        StatKind::Adp => Some(adp_color(value)),
        StatKind::DrawPlayRate => Some(draw_play_rate_color(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authors::{COLOR_DARK_YELLOW, COLOR_GREEN};

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_stat(StatKind::Adp, 3.14159), "3.14");
        assert_eq!(format_stat(StatKind::Pwr, 0.5), "0.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_stat(StatKind::DrawPlayRate, 0.853), "85%");
        assert_eq!(format_stat(StatKind::DrawPlayRate, 1.0), "100%");
    }

    #[test]
    fn test_stat_color() {
        assert_eq!(stat_color(StatKind::Adp, 1.5), Some(COLOR_GREEN));
        assert_eq!(stat_color(StatKind::DrawPlayRate, 0.8), Some(COLOR_DARK_YELLOW));
        assert_eq!(stat_color(StatKind::Pwr, 0.9), None);
        assert_eq!(stat_color(StatKind::Apr, 5.0), None);
    }

    #[test]
    fn test_value_extraction() {
        let block = StatBlock {
            pwr: Some(0.4),
            adp: Some(2.8),
            apr: None,
            draw_play_rate: Some(0.91),
        };
        assert_eq!(StatKind::Pwr.value(&block), Some(0.4));
        assert_eq!(StatKind::Apr.value(&block), None);
        assert_eq!(StatKind::DrawPlayRate.value(&block), Some(0.91));
    }

    #[test]
    fn test_configs_align_with_kinds() {
        for kind in StatKind::ALL {
            assert_eq!(kind.config().kind, kind);
        }
    }
}
