//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Character, Guild};

/// Trait for human-readable key-value output.
///
/// Implemented by model types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Character {
    fn pretty_print(&self) -> String {
        let header = format!("Character: {} @ {}", self.display_name(), self.realm);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Level:          {}", self.level),
            format!("Class/Race:     {}/{}", self.class, self.race),
            format!("Achievements:   {} points", self.achievement_points),
        ];

        if let Some(ref guild) = self.guild {
            lines.push(format!("Guild:          <{}> ({})", guild.name, guild.realm));
        }

        if let Some(ref stats) = self.stats {
            lines.push(format!(
                "Health/Power:   {} / {}",
                stats.health, stats.power
            ));
            lines.push(format!(
                "Primary:        str {} agi {} sta {} int {} spr {}",
                stats.strength, stats.agility, stats.stamina, stats.intellect, stats.spirit
            ));
            lines.push(format!("Armor:          {}", stats.armor));
        }

        if let Some(ref modified) = self.last_modified {
            lines.push(format!(
                "Last Modified:  {}",
                modified.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Guild {
    fn pretty_print(&self) -> String {
        let header = format!("Guild: <{}> @ {}", self.name, self.realm);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Level:          {}", self.level),
            format!("Faction:        {}", self.faction()),
            format!("Achievements:   {} points", self.achievement_points),
        ];

        if !self.members.is_empty() {
            lines.push(format!("Members:        {}", self.members.len()));
        }

        if let Some(leader) = self.leader() {
            lines.push(format!("Guild Master:   {}", leader.character.name));
        }

        lines.join("\n")
    }
}
