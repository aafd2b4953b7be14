use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let global = |arg: clap::Arg| arg.global(true);

    let mut cmd = clap::Command::new("yambook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert browser bookmark files to editable YAML and back")
        .arg(global(
            clap::arg!(--indent <N> "Spaces of indentation per level in generated bookmark files").default_value("4"),
        ))
        .arg(global(
            clap::arg!(--"menu-name" <NAME> "Name of the folder wrapping ordinary menu bookmarks")
                .default_value("Bookmarks"),
        ))
        .arg(global(clap::arg!(-v --verbose "Enable debug logging")))
        .subcommand(
            clap::Command::new("bookmark2yaml")
                .about("Convert a bookmark file to YAML")
                .arg(clap::arg!(<INPUT> "Bookmark file, or '-' for stdin"))
                .arg(
                    clap::arg!(-o --"output-yaml" <FILE> "Output YAML file, or '-' for stdout")
                        .visible_alias("output")
                        .default_value("bookmarks.yaml")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            clap::Command::new("yaml2bookmark")
                .about("Convert YAML to a bookmark file")
                .arg(clap::arg!(<INPUT> "YAML file, or '-' for stdin"))
                .arg(
                    clap::arg!(-o --"output-bookmark" <FILE> "Output bookmark file, or '-' for stdout")
                        .visible_alias("output")
                        .default_value("bookmarks.html")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "yambook", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "yambook", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "yambook", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "yambook", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
