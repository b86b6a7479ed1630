#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-02 08:00:00,2017-01-02 08:10:00,600,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1992.0
955915,2017-02-01 09:00:00,2017-02-01 09:20:00,1200,Clinton St & Madison St,Canal St & Adams St,Customer,,
9031,2017-01-09 17:30:00,2017-01-09 17:35:00,300,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1985.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
1330201,2017-05-26 15:21:30,2017-05-26 15:34:29,402.549,Georgia Ave & Fairmont St NW,Rhode Island & Connecticut Ave NW,Customer
";

/// Command for the compiled binary, with colors off and HOME pointed at
/// an empty directory so no user configuration is picked up.
pub fn bikeshare(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    cmd.env("NO_COLOR", "1").env("HOME", temp_home(name));
    cmd
}

pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare_home", name));
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a fresh data directory inside the system temp dir holding the given city files
pub fn setup_data_dir(name: &str, files: &[(&str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    for (file_name, content) in files {
        fs::write(path.join(file_name), content).expect("write fixture");
    }

    path.to_string_lossy().to_string()
}

/// Data directory with the chicago and washington fixtures
pub fn default_data_dir(name: &str) -> String {
    setup_data_dir(
        name,
        &[("chicago.csv", CHICAGO_CSV), ("washington.csv", WASHINGTON_CSV)],
    )
}
