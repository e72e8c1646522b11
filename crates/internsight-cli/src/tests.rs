use super::*;

#[test]
fn parses_recommend_with_all_flags() {
    let cli = Cli::try_parse_from([
        "internsight",
        "recommend",
        "--skills",
        "Python",
        "--interest",
        "AI/ML",
        "--locations",
        "Mumbai, Bangalore",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Recommend {
            ref skills,
            ref interest,
            ref locations,
            json: false,
        }) if skills == "Python" && interest == "AI/ML" && locations == "Mumbai, Bangalore"
    ));
}

#[test]
fn recommend_flags_default_to_empty_strings() {
    // Empty fields are legal and forwarded as-is; no flag is required.
    let cli = Cli::try_parse_from(["internsight", "recommend"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Recommend {
            ref skills,
            ref interest,
            ref locations,
            json: false,
        }) if skills.is_empty() && interest.is_empty() && locations.is_empty()
    ));
}

#[test]
fn parses_recommend_json_flag() {
    let cli = Cli::try_parse_from(["internsight", "recommend", "--json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Recommend { json: true, .. })
    ));
}

#[test]
fn parses_locations_command() {
    let cli = Cli::try_parse_from(["internsight", "locations"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Locations)));
}

#[test]
fn parses_interests_command() {
    let cli = Cli::try_parse_from(["internsight", "interests"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Interests)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["internsight"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
