use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type BoxError = Box<dyn std::error::Error>;

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

struct Package {
    name: String,
    version: String,
}

fn read_package(doc: &DocumentMut) -> Result<Package, BoxError> {
    let field = |key: &str| -> Result<String, BoxError> {
        doc["package"][key]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| format!("Could not find package.{} in {}", key, MANIFEST).into())
    };
    Ok(Package {
        name: field("name")?,
        version: field("version")?,
    })
}

fn git(args: &[&str]) -> Result<Option<String>, BoxError> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

/// Commit subjects since the last tag, or since the beginning if untagged
fn release_notes() -> Result<String, BoxError> {
    let notes = match git(&["describe", "--tags", "--abbrev=0"])? {
        Some(tag) if !tag.is_empty() => {
            println!("Previous tag: {}", tag);
            git(&["log", "--pretty=format:- %s", &format!("{}..HEAD", tag)])?
        }
        _ => {
            println!("Previous tag: None");
            git(&["log", "--pretty=format:- %s"])?
        }
    };
    Ok(notes.unwrap_or_default())
}

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    Ok(prompt(&format!("{} (y/n):", message))?.to_lowercase() == "y")
}

fn prepend_changelog(version: &str, notes: &str) -> Result<(), BoxError> {
    let existing = fs::read_to_string(CHANGELOG).unwrap_or_default();
    let section = format!(
        "## {} ({})\n\n{}\n\n",
        version,
        Local::now().format("%Y-%m-%d"),
        if notes.is_empty() { "- No changes recorded" } else { notes }
    );
    fs::write(CHANGELOG, section + &existing)?;
    Ok(())
}

fn run(program: &str, args: &[&str], dry_run: bool) -> Result<(), BoxError> {
    println!("Executing: {} {}", program, args.join(" "));
    if dry_run {
        return Ok(());
    }
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(format!("`{} {}` failed", program, args.join(" ")).into());
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let dry_run = std::env::args().any(|arg| arg == "--dry-run");

    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let package = read_package(&doc)?;

    println!("Releasing {} (current version {})", package.name, package.version);
    let new_version = prompt("Enter new version:")?;
    if new_version.is_empty() {
        return Err("Version cannot be empty".into());
    }
    if new_version == package.version {
        return Err(format!("{} is already at version {}", package.name, new_version).into());
    }

    let notes = release_notes()?;
    if notes.is_empty() {
        println!("Warning: No commit history found since the previous tag.");
    } else {
        println!("Release notes:\n{}", notes);
    }

    if !confirm(&format!("Ready to release {} {}?", package.name, new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    let tag = format!("v{}", new_version);
    if dry_run {
        println!("Dry run: {} and {} left untouched", MANIFEST, CHANGELOG);
    } else {
        doc["package"]["version"] = Item::from(new_version.as_str());
        fs::write(MANIFEST, doc.to_string())?;
        prepend_changelog(&new_version, &notes)?;
        println!("Updated {} and {}", MANIFEST, CHANGELOG);
    }

    // Refresh Cargo.lock with the new version
    run("cargo", &["check", "--all-features"], dry_run)?;
    run("git", &["add", MANIFEST, "Cargo.lock", CHANGELOG], dry_run)?;
    run(
        "git",
        &["commit", "-m", &format!("Bump version to {}", new_version)],
        dry_run,
    )?;
    run(
        "git",
        &["tag", "-a", &tag, "-m", &format!("Version {}", new_version)],
        dry_run,
    )?;
    run("git", &["push"], dry_run)?;
    run("git", &["push", "--tags"], dry_run)?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"], dry_run)?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        run(
            "gh",
            &["release", "create", &tag, "--title", &tag, "--notes", &notes],
            dry_run,
        )?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released {} {}", package.name, new_version);
    Ok(())
}
