use anyhow::{bail, Result};
use serde::Serialize;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use studio_roster::{
    count_classes_by_instructor, get_unique_classes, group_class_by_instructor,
    load_classes_csv, new_member_array_to_object, number_of_keys, omit_age_from_members,
    order_classes_by_title_and_level, remove_inactive_members, sum_numbers, FixtureConfig,
    FixtureSet,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("classes") => match args.get(2) {
            Some(csv_path) => run_classes(Path::new(csv_path)),
            None => bail!("usage: studio-roster classes <file.csv>"),
        },
        Some("report") => run_report(args.get(2).map(String::as_str)),
        // Bare data dir, or nothing
        other => run_report(other),
    }
}

fn run_report(data_dir: Option<&str>) -> Result<()> {
    let mut config = FixtureConfig::from_env();
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }

    let fixtures = FixtureSet::load(&config)?;

    let new_member = new_member_array_to_object(&fixtures.new_member);
    print_section("numberOfKeys(newMember)", &number_of_keys(&new_member))?;
    print_section("sumNumbers", &sum_numbers(&fixtures.simple_array))?;
    print_section("newMemberArrayToObject", &new_member)?;
    print_section(
        "groupClassByInstructor",
        &group_class_by_instructor(&fixtures.classes),
    )?;
    print_section("omitAgeFromMembers", &omit_age_from_members(&fixtures.members))?;

    // First instructor on file, plus one that never matches
    if let Some(first) = fixtures.classes.first() {
        let title = format!("countClassesByInstructor({})", first.instructor);
        print_section(&title, &count_classes_by_instructor(&fixtures.classes, &first.instructor))?;
    }
    print_section(
        "countClassesByInstructor(NoSuchName)",
        &count_classes_by_instructor(&fixtures.classes, "NoSuchName"),
    )?;

    print_section("removeInactiveMembers", &remove_inactive_members(&fixtures.members))?;
    print_section("getUniqueClasses", &get_unique_classes(&fixtures.classes))?;
    print_section(
        "orderClassesByTitleAndLevel",
        &order_classes_by_title_and_level(&fixtures.classes),
    )?;

    Ok(())
}

fn run_classes(csv_path: &Path) -> Result<()> {
    let classes = load_classes_csv(csv_path)?;
    print_section(
        "orderClassesByTitleAndLevel",
        &order_classes_by_title_and_level(&classes),
    )
}

fn print_section<T: Serialize + ?Sized>(title: &str, value: &T) -> Result<()> {
    println!("== {}", title);
    println!("{}\n", serde_json::to_string_pretty(value)?);
    Ok(())
}
