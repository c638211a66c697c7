use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("data-index-url")
                .env("DBPREFLIGHT_DATA_INDEX_URL")
                .help("Connection URL for the data-index database, e.g. postgres://db-service:5432/di")
                .long("data-index-url")
                .value_name("URL")
                .required(true),
        )
        .arg(
            Arg::new("data-index-user")
                .env("DBPREFLIGHT_DATA_INDEX_USER")
                .help("Username for the data-index database")
                .long("data-index-user")
                .value_name("USER")
                .required(true),
        )
        .arg(
            Arg::new("data-index-password")
                .env("DBPREFLIGHT_DATA_INDEX_PASSWORD")
                .help("Password for the data-index database")
                .long("data-index-password")
                .value_name("PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("jobs-service-url")
                .env("DBPREFLIGHT_JOBS_SERVICE_URL")
                .help("Connection URL for the jobs-service database, e.g. postgres://db-service:5432/js")
                .long("jobs-service-url")
                .value_name("URL")
                .required(true),
        )
        .arg(
            Arg::new("jobs-service-user")
                .env("DBPREFLIGHT_JOBS_SERVICE_USER")
                .help("Username for the jobs-service database")
                .long("jobs-service-user")
                .value_name("USER")
                .required(true),
        )
        .arg(
            Arg::new("jobs-service-password")
                .env("DBPREFLIGHT_JOBS_SERVICE_PASSWORD")
                .help("Password for the jobs-service database")
                .long("jobs-service-password")
                .value_name("PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    const ENV_VARS: [&str; 6] = [
        "DBPREFLIGHT_DATA_INDEX_URL",
        "DBPREFLIGHT_DATA_INDEX_USER",
        "DBPREFLIGHT_DATA_INDEX_PASSWORD",
        "DBPREFLIGHT_JOBS_SERVICE_URL",
        "DBPREFLIGHT_JOBS_SERVICE_USER",
        "DBPREFLIGHT_JOBS_SERVICE_PASSWORD",
    ];

    fn full_args() -> Vec<&'static str> {
        vec![
            "dbpreflight",
            "--data-index-url",
            "postgres://db-service:5432/di",
            "--data-index-user",
            "postgres",
            "--data-index-password",
            "postgres",
            "--jobs-service-url",
            "postgres://db-service:5432/js",
            "--jobs-service-user",
            "postgres",
            "--jobs-service-password",
            "postgres",
        ]
    }

    #[test]
    fn test_new() {
        let cmd = new();
        assert_eq!(cmd.get_name(), "dbpreflight");
        assert_eq!(
            cmd.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            cmd.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_new_no_args() {
        // Temporarily remove environment variables to test required args
        let originals: Vec<_> = ENV_VARS
            .iter()
            .map(|var| (*var, std::env::var(var).ok()))
            .collect();
        for var in ENV_VARS {
            // SAFETY: This test runs in isolation and we restore the variable afterward
            unsafe {
                std::env::remove_var(var);
            }
        }

        let cmd = new();
        let matches = cmd.try_get_matches_from(vec!["dbpreflight"]);
        assert!(matches.is_err());

        // Restore original environment variables if they existed
        for (var, value) in originals {
            if let Some(value) = value {
                // SAFETY: Restoring the original state
                unsafe {
                    std::env::set_var(var, value);
                }
            }
        }
    }

    #[test]
    fn test_new_all_args() {
        let cmd = new();
        let matches = cmd.try_get_matches_from(full_args());
        assert!(matches.is_ok());

        let m = matches.unwrap();
        assert_eq!(
            m.get_one("data-index-url"),
            Some(&String::from("postgres://db-service:5432/di"))
        );
        assert_eq!(
            m.get_one("data-index-user"),
            Some(&String::from("postgres"))
        );
        assert_eq!(
            m.get_one("jobs-service-url"),
            Some(&String::from("postgres://db-service:5432/js"))
        );
        assert_eq!(
            m.get_one("jobs-service-password"),
            Some(&String::from("postgres"))
        );
    }

    #[test]
    fn test_new_missing_jobs_service() {
        // Temporarily remove environment variables so only the flags count
        let originals: Vec<_> = ENV_VARS
            .iter()
            .map(|var| (*var, std::env::var(var).ok()))
            .collect();
        for var in ENV_VARS {
            // SAFETY: This test runs in isolation and we restore the variable afterward
            unsafe {
                std::env::remove_var(var);
            }
        }

        let cmd = new();
        let matches = cmd.try_get_matches_from(vec![
            "dbpreflight",
            "--data-index-url",
            "postgres://db-service:5432/di",
            "--data-index-user",
            "postgres",
            "--data-index-password",
            "postgres",
        ]);
        assert!(matches.is_err());

        for (var, value) in originals {
            if let Some(value) = value {
                // SAFETY: Restoring the original state
                unsafe {
                    std::env::set_var(var, value);
                }
            }
        }
    }
}
