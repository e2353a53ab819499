use termcolor::Color::{self, *};

use crate::diff::{Diff, Render};
use crate::term;

use std::path::Path;

pub(crate) fn created(path: &Path) {
    term::bold_color(Green);
    print!("Created");
    term::reset();
    println!(" {}", path.display());
}

pub(crate) fn updated(path: &Path) {
    term::bold_color(Yellow);
    print!("Updated");
    term::reset();
    println!(" {}", path.display());
}

pub(crate) fn updated_diff(path: &Path, previous: &str, current: &str) {
    updated(path);

    let Some(diff) = Diff::compute(previous, current) else {
        return;
    };

    println!();
    for chunk in diff.iter() {
        match chunk {
            Render::Common(common) => {
                term::reset();
                print!("{}", common);
            }
            Render::Removed(removed) => snippet(Red, removed),
            Render::Added(added) => snippet(Green, added),
        }
    }
    term::reset();
    println!();
}

fn snippet(color: Color, text: &str) {
    term::color(color);
    print!("{}", text);
}
