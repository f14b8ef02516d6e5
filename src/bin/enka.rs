//! enka: showcase CLI
//!
//! Fetch a player's Genshin Impact or Star Rail showcase and print it, or
//! refresh the local asset dataset.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use enka::{
    ApiError, Config, EnkaError, FightPropType, HsrShowcase, Language, ShowcaseResponse,
};

static VERSION: LazyLock<String> = LazyLock::new(enka::version::version_string);

const FIGHT_PROPS_TO_SHOW: [FightPropType; 7] = [
    FightPropType::MaxHp,
    FightPropType::CurrentAttack,
    FightPropType::CurrentDefense,
    FightPropType::ElementalMastery,
    FightPropType::CritRate,
    FightPropType::CritDamage,
    FightPropType::EnergyRecharge,
];

/// Enka.Network showcase client
#[derive(Parser)]
#[command(name = "enka")]
#[command(version = VERSION.as_str())]
#[command(about = "Enka.Network showcase client")]
struct Args {
    /// Config file (default: ~/.enka/config.toml)
    #[arg(short, long, env = "ENKA_CONFIG")]
    config: Option<PathBuf>,

    /// Display language, e.g. "en", "ja", "zh-CN"
    #[arg(short, long)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and display a showcase
    Showcase {
        /// Player UID
        uid: String,
        /// Only fetch the player profile
        #[arg(long)]
        info: bool,
        /// Print the enriched showcase as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and display a Honkai: Star Rail showcase
    Hsr {
        /// Player UID
        uid: String,
        /// Print the enriched showcase as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download the asset dataset again
    UpdateAssets {
        /// Refresh the Star Rail dataset instead
        #[arg(long)]
        hsr: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(lang) = args.lang {
        config.client.language = lang;
    }
    // update-assets downloads explicitly, so start must not download first.
    let refresh_on_start = !matches!(args.command, Command::UpdateAssets { .. });
    let builder = config.into_builder().refresh_on_start(refresh_on_start);

    match args.command {
        Command::Showcase { uid, info, json } => {
            let mut client = builder.build()?;
            client.start().await?;
            match client.fetch_showcase(&uid, info).await {
                Ok(showcase) if json => println!("{}", serde_json::to_string_pretty(&showcase)?),
                Ok(showcase) => print_showcase(&showcase),
                Err(e) => report(e)?,
            }
            client.close()?;
        }

        Command::Hsr { uid, json } => {
            let mut client = builder.build_hsr()?;
            client.start().await?;
            match client.fetch_showcase(&uid).await {
                Ok(showcase) if json => println!("{}", serde_json::to_string_pretty(&showcase)?),
                Ok(showcase) => print_hsr_showcase(&showcase),
                Err(e) => report(e)?,
            }
            client.close()?;
        }

        Command::UpdateAssets { hsr: false } => {
            let mut client = builder.build()?;
            client.start().await?;
            client.update_assets().await?;
            client.close()?;
            println!("assets updated");
        }

        Command::UpdateAssets { hsr: true } => {
            let mut client = builder.build_hsr()?;
            client.start().await?;
            client.update_assets().await?;
            client.close()?;
            println!("hsr assets updated");
        }
    }

    Ok(())
}

/// Print the service errors a user can act on; propagate the rest.
fn report(error: EnkaError) -> Result<(), EnkaError> {
    match error {
        EnkaError::Api(ApiError::PlayerNotFound) => println!("Player does not exist."),
        EnkaError::Api(ApiError::GameMaintenance) => println!("Game is in maintenance."),
        e => return Err(e),
    }
    Ok(())
}

fn print_showcase(showcase: &ShowcaseResponse) {
    let player = &showcase.player;
    let unset = |field: &Option<String>| field.clone().unwrap_or_else(|| "?".to_string());

    println!("Name: {}", player.nickname);
    println!("Level: {}", player.level);
    println!("Achievements: {}", player.achievements);
    if let Some(namecard) = &player.namecard {
        println!("Namecard: {}", namecard.full());
    }
    println!("Profile picture: {}", unset(&player.profile_picture_icon));

    for character in &showcase.characters {
        println!("\n===============================\n");
        println!(
            "Lv. {}/{} {} (C{})",
            character.level,
            character.max_level(),
            unset(&character.name),
            character.constellations_unlocked()
        );
        if let Some(rarity) = character.rarity {
            println!("Rarity: {rarity} ★");
        }
        if let Some(element) = &character.element {
            println!("Element: {element}");
        }
        println!("Side icon: {}", unset(&character.side_icon));
        let talents: Vec<String> = character
            .talents
            .iter()
            .map(|talent| talent.level.to_string())
            .collect();
        println!("Talent levels: {}", talents.join("/"));
        if let Some(namecard) = &character.namecard {
            println!("Namecard: {}", namecard.full());
        }
        if let Some(costume) = &character.costume {
            println!("Costume side icon: {}", costume.side_icon);
        }

        let weapon = &character.weapon;
        println!("\nWeapon:");
        println!(
            "Lv. {}/{} {} (R{})",
            weapon.level,
            weapon.max_level(),
            unset(&weapon.name),
            weapon.refinement
        );
        println!("Rarity: {} ★", weapon.rarity);
        for stat in &weapon.stats {
            println!("{} {}", unset(&stat.name), stat.formatted_value());
        }

        println!("\nStats:");
        for prop_type in FIGHT_PROPS_TO_SHOW {
            if let Some(prop) = character.fight_prop(prop_type) {
                println!("{} {}", unset(&prop.name), prop.formatted_value());
            }
        }
        if let Some(bonus) = character.highest_dmg_bonus_stat() {
            println!("{} {}", unset(&bonus.name), bonus.formatted_value());
        }

        println!("\nArtifacts:");
        for artifact in &character.artifacts {
            let main = &artifact.main_stat;
            println!(
                "Lv. {} {}: {} {}",
                artifact.level,
                unset(&artifact.name),
                unset(&main.name),
                main.formatted_value()
            );
            for stat in &artifact.sub_stats {
                println!("- {} {}", unset(&stat.name), stat.formatted_value());
            }
            println!();
        }
    }
}

fn print_hsr_showcase(showcase: &HsrShowcase) {
    let player = &showcase.player;
    let unset = |field: &Option<String>| field.clone().unwrap_or_else(|| "?".to_string());

    println!("Name: {}", player.nickname);
    println!("Trailblaze level: {}", player.level);
    println!("Equilibrium level: {}", player.equilibrium_level);
    println!("Achievements: {}", player.stats.achievement_count);

    for character in &showcase.characters {
        println!("\n===============================\n");
        println!(
            "Lv. {}/{} {} (E{})",
            character.level,
            character.max_level(),
            unset(&character.name),
            character.eidolons_unlocked
        );
        if let Some(rarity) = character.rarity {
            println!("Rarity: {rarity} ★");
        }
        println!(
            "{} / {}",
            unset(&character.element),
            unset(&character.path)
        );
        println!("Icon: {}", character.round_icon());

        if let Some(cone) = &character.light_cone {
            println!("\nLight cone:");
            println!(
                "Lv. {}/{} {} (S{})",
                cone.level,
                cone.max_level(),
                unset(&cone.name),
                cone.superimpose
            );
            for stat in &cone.stats {
                println!("{} {}", stat.stat_type, stat.formatted_value());
            }
        }

        println!("\nRelics:");
        for relic in &character.relics {
            let main = relic
                .main_stat()
                .map(|stat| format!("{} {}", stat.stat_type, stat.formatted_value()))
                .unwrap_or_default();
            println!("+{} {}: {main}", relic.level, unset(&relic.set_name));
            for stat in relic.sub_stats() {
                println!("- {} {}", stat.stat_type, stat.formatted_value());
            }
        }
    }
}
