use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use log::info;
use rand::Rng;

use crate::{
    config::Config,
    input::{prompt, random_system, read_manual, read_size},
    report::solve_and_print,
};

const MENU: &str = "\
1) Load matrix from file
2) Enter matrix manually
3) Generate random matrix
0) Exit";

/// Runs the interactive menu until the user exits or the input ends.
///
/// Unreadable files and malformed input are reported and the menu is shown again.
pub fn run<R, W, G>(input: &mut R, out: &mut W, config: &Config, rng: &mut G) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    writeln!(out, "Gaussian elimination with partial pivoting")?;
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "> ")? else {
            return Ok(());
        };

        let system = match choice.trim() {
            "0" => return Ok(()),
            "1" => {
                let message = format!("Path [{}]: ", config.input.display());
                let Some(path) = prompt(input, out, &message)? else {
                    return Ok(());
                };
                let path = match path.trim() {
                    "" => config.input.clone(),
                    path => PathBuf::from(path),
                };

                match gauss::parse::load_file(&path) {
                    Ok(system) => system,
                    Err(e) => {
                        writeln!(out, "{:#}", anyhow::Error::from(e))?;
                        continue;
                    }
                }
            }
            "2" => match read_manual(input, out, config)? {
                Some(system) => system,
                None => return Ok(()),
            },
            "3" => match read_size(input, out, config)? {
                Some(size) => random_system(rng, size)?,
                None => return Ok(()),
            },
            other => {
                writeln!(out, "Unknown choice '{}'", other)?;
                continue;
            }
        };

        info!("menu: solving a system with {} unknowns", system.size());
        solve_and_print(out, system)?;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn session(script: &str, config: &Config) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        run(&mut input, &mut out, config, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit() {
        let out = session("0\n", &Config::default());
        assert_eq!(out.matches("0) Exit").count(), 1);

        // end of input exits as well
        let out = session("", &Config::default());
        assert!(out.ends_with("> "));
    }

    #[test]
    fn test_unknown_choice() {
        let out = session("9\n0\n", &Config::default());
        assert!(out.contains("Unknown choice '9'"));
        assert_eq!(out.matches("0) Exit").count(), 2);
    }

    #[test]
    fn test_manual() {
        let out = session("2\n2\n0 2 4\n1 1 3\n0\n", &Config::default());
        assert!(out.contains("Solution vector:\n1\n2\n"));
    }

    #[test]
    fn test_random() {
        let config = Config {
            max_size: 3,
            ..Default::default()
        };
        let out = session("3\n4\n3\n0\n", &config);
        assert!(out.contains("Size must be between 1 and 3"));
        assert!(out.contains("Input matrix:"));
        assert!(out.contains("Determinant:"));
    }

    #[test]
    fn test_file() {
        let dir = std::env::temp_dir().join(format!("gauss-menu-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.txt");
        let bad = dir.join("bad.txt");
        fs::write(&good, "2 1 -1 8\n-3 -1 2 -11\n-2 1 2 -3\n").unwrap();
        fs::write(&bad, "1 2 3\n4 five 6\n").unwrap();

        let config = Config {
            input: good.clone(),
            ..Default::default()
        };
        let script = format!(
            "1\n{}\n1\n{}\n1\n\n0\n",
            dir.join("missing.txt").display(),
            bad.display()
        );
        let out = session(&script, &config);
        fs::remove_dir_all(&dir).unwrap();

        assert!(out.contains("Unable to read matrix from"));
        assert!(out.contains("Invalid number 'five' at row 1, column 1"));
        // the empty path falls back to the configured input file
        assert!(out.contains("Solution vector:"));
        assert_eq!(out.matches("Input matrix:").count(), 1);
    }
}
