//! Ride Tracker CLI
//!
//! Interactive menu over the grid engine: create a map, place obstacles,
//! ride activities and watch the invariant checks reject anything that
//! would put a route inside an obstacle. Every engine error is printed and
//! the menu re-prompts.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use ride_core::{
    destroy_instance, get_instance, render, with_grid, with_grid_mut, Activity, Direction, Gear,
    GearType, Profile, Route,
};

#[derive(Parser)]
#[command(name = "ride_cli")]
#[command(about = "Track cycling activities on a bounded grid", long_about = None)]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "10")]
    width: i32,

    /// Grid length in cells
    #[arg(long, default_value = "10")]
    length: i32,

    /// Rider profile name
    #[arg(long, default_value = "rider")]
    name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    get_instance(cli.width, cli.length)?;

    let starter = Gear::new(GearType::CommuterBike, "Commuter", 18)?;
    let mut profile = Profile::new(cli.name, starter)?;

    println!("Welcome, {}! Grid is {}x{}.", profile.name(), cli.width, cli.length);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let choice = match read_line(&mut lines) {
            Some(line) => line,
            None => break,
        };

        let outcome = match choice.trim() {
            "1" => show_grid(),
            "2" => add_obstacle(&mut lines),
            "3" => remove_obstacle(&mut lines),
            "4" => start_activity(&mut lines, &profile),
            "5" => move_activity(&mut lines),
            "6" => end_activity(&mut lines),
            "7" => list_activities(),
            "8" => show_activity(&mut lines),
            "9" => manage_gears(&mut lines, &mut profile),
            "10" => export_activities(),
            "0" => break,
            other => {
                println!("Unknown option: {}", other);
                Ok(())
            }
        };

        // engine rejections are not fatal; show them and re-prompt
        if let Err(err) = outcome {
            log::warn!("operation rejected: {}", err);
            println!("Error: {}", err);
        }
    }

    destroy_instance();
    println!("Goodbye!");
    Ok(())
}

fn print_menu() {
    println!();
    println!("1) show grid        2) add obstacle     3) remove obstacle");
    println!("4) start activity   5) move activity    6) end activity");
    println!("7) list activities  8) show one route   9) gears");
    println!("10) export JSON     0) quit");
    print!("> ");
    let _ = io::stdout().flush();
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn read_line(lines: &mut Lines) -> Option<String> {
    lines.next().and_then(|l| l.ok())
}

fn prompt_i32(lines: &mut Lines, label: &str) -> Result<i32> {
    print!("{}: ", label);
    let _ = io::stdout().flush();
    let line = read_line(lines).unwrap_or_default();
    Ok(line.trim().parse()?)
}

fn prompt_usize(lines: &mut Lines, label: &str) -> Result<usize> {
    print!("{}: ", label);
    let _ = io::stdout().flush();
    let line = read_line(lines).unwrap_or_default();
    Ok(line.trim().parse()?)
}

fn show_grid() -> Result<()> {
    let rendered = with_grid(|g| Ok(render::render_grid(g)))?;
    print!("{}", rendered);
    Ok(())
}

fn add_obstacle(lines: &mut Lines) -> Result<()> {
    let tl_x = prompt_i32(lines, "top-left x")?;
    let tl_y = prompt_i32(lines, "top-left y")?;
    let br_x = prompt_i32(lines, "bottom-right x")?;
    let br_y = prompt_i32(lines, "bottom-right y")?;
    with_grid_mut(|g| g.add_obstacle(tl_x, tl_y, br_x, br_y))?;
    println!("Obstacle added.");
    Ok(())
}

fn remove_obstacle(lines: &mut Lines) -> Result<()> {
    let count = with_grid(|g| Ok(g.obstacles().len()))?;
    if count == 0 {
        println!("No obstacles to remove.");
        return Ok(());
    }
    let index = prompt_usize(lines, &format!("obstacle index (0..{})", count - 1))?;
    with_grid_mut(|g| g.remove_obstacle(index))?;
    println!("Obstacle removed.");
    Ok(())
}

fn start_activity(lines: &mut Lines, profile: &Profile) -> Result<()> {
    for (i, gear) in profile.gears().iter().enumerate() {
        println!("  {}: {} ({})", i, gear.name(), gear.gear_type());
    }
    let gear_index = prompt_usize(lines, "gear index")?;
    let gear = profile.gear_at(gear_index)?.clone();

    let x = prompt_i32(lines, "start x")?;
    let y = prompt_i32(lines, "start y")?;
    let route = Route::new(x, y)?;

    with_grid_mut(|g| g.add_activity(Activity::new(gear, route)))?;
    println!("Activity started at ({}, {}).", x, y);
    Ok(())
}

fn move_activity(lines: &mut Lines) -> Result<()> {
    let index = prompt_usize(lines, "activity index")?;
    let code = prompt_i32(lines, "direction (1=up 2=right 3=down 4=left)")?;
    let steps = prompt_i32(lines, "steps")?;

    let direction = Direction::from_code(code)?;
    with_grid_mut(|g| g.move_activity(index, direction, steps))?;

    let position = with_grid(|g| Ok(g.activity_at(index)?.route().last()))?;
    println!("Moved to {}.", position);
    Ok(())
}

fn end_activity(lines: &mut Lines) -> Result<()> {
    let index = prompt_usize(lines, "activity index")?;
    with_grid_mut(|g| g.end_activity(index))?;
    let speed = with_grid(|g| g.activity_at(index)?.avg_speed())?;
    println!("Activity ended. Average speed: {:.2} m/s", speed);
    Ok(())
}

fn list_activities() -> Result<()> {
    with_grid(|g| {
        if g.activities().is_empty() {
            println!("No activities yet.");
        }
        for (i, activity) in g.activities().iter().enumerate() {
            let speed = match activity.avg_speed() {
                Ok(v) => format!("{:.2} m/s", v),
                Err(_) => "in progress".to_string(),
            };
            println!(
                "  {}: {} | started {} | {} steps | {}",
                i,
                activity.gear().name(),
                activity.start().format("%Y-%m-%d %H:%M:%S"),
                activity.route().step_count(),
                speed
            );
        }
        Ok(())
    })?;
    Ok(())
}

fn show_activity(lines: &mut Lines) -> Result<()> {
    let index = prompt_usize(lines, "activity index")?;
    let rendered = with_grid(|g| render::render_activity(g, index))?;
    print!("{}", rendered);
    Ok(())
}

fn manage_gears(lines: &mut Lines, profile: &mut Profile) -> Result<()> {
    for (i, gear) in profile.gears().iter().enumerate() {
        println!("  {}: {} ({}, {} km/h)", i, gear.name(), gear.gear_type(), gear.avg_speed_kmh());
    }
    print!("add gear? name (empty to skip): ");
    let _ = io::stdout().flush();
    let name = read_line(lines).unwrap_or_default();
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }

    let code = prompt_i32(lines, "type (1=road 2=mountain 3=commuter 4=electric 5=tandem)")?;
    let gear_type = match code {
        1 => GearType::RoadBike,
        2 => GearType::MountainBike,
        3 => GearType::CommuterBike,
        4 => GearType::ElectricBike,
        _ => GearType::TandemBike,
    };
    let speed = prompt_i32(lines, "rated speed (km/h)")?;

    if profile.add_gear(Gear::new(gear_type, name, speed)?) {
        println!("Gear added.");
    } else {
        println!("A gear with that name already exists.");
    }
    Ok(())
}

fn export_activities() -> Result<()> {
    let json = with_grid(|g| Ok(serde_json::to_string_pretty(g.activities())))??;
    println!("{}", json);
    Ok(())
}
