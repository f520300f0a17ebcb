//! Basic example demonstrating the Battle.net API client.
//!
//! Run with:
//! ```
//! BATTLENET_REGION=eu cargo run --example basic
//! ```

use battlenet::{
    Character, CharacterField, CharacterId, Client, Fetched, Get, Guild, GuildField, GuildId,
    Locale, RealmStatus, RequestOptions,
};

#[tokio::main]
async fn main() -> battlenet::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Battle.net client...");
    let client = Client::from_env("wow")?;
    println!(
        "Region: {} (https: {})",
        client.region(),
        client.use_https()
    );

    // Realm status
    println!("\n--- Realm Status ---");
    if let Fetched::Data(status) = RealmStatus::get(&client, vec![], RequestOptions::new()).await? {
        println!("Found {} realms", status.realms.len());
        for realm in status.realms.iter().take(5) {
            let state = if realm.status { "up" } else { "down" };
            println!("  - {} ({}, {})", realm.name, realm.realm_type, state);
        }
    }

    // A character with stats and guild summary
    println!("\n--- Character ---");
    let options = RequestOptions::new()
        .fields(CharacterField::Stats | CharacterField::Guild | CharacterField::Titles)
        .locale(Locale::en_GB);
    let character = Character::get(&client, CharacterId::new("Medivh", "Uther"), options).await?;

    let Fetched::Data(character) = character else {
        println!("Character not modified");
        return Ok(());
    };

    println!("{} - level {}", character.display_name(), character.level);
    if let Some(stats) = &character.stats {
        println!("  Health: {}", stats.health);
        println!("  Armor: {}", stats.armor);
    }

    // Conditional fetch: nothing changed since the last modification
    if let Some(modified) = character.last_modified {
        let again = Character::get(
            &client,
            CharacterId::new("Medivh", "Uther"),
            RequestOptions::new().if_modified_since(modified),
        )
        .await?;
        println!("  Changed since last fetch: {}", !again.is_not_modified());
    }

    // The character's guild with its roster
    if let Some(guild) = &character.guild {
        println!("\n--- Guild ---");
        let roster = Guild::get(
            &client,
            GuildId::new(guild.realm.clone(), guild.name.clone()),
            RequestOptions::new().fields(GuildField::Members),
        )
        .await?;
        if let Some(guild) = roster.data() {
            println!("<{}> has {} members", guild.name, guild.members.len());
            if let Some(leader) = guild.leader() {
                println!("  Guild master: {}", leader.character.name);
            }
        }
    }

    println!("\nDone!");
    Ok(())
}
