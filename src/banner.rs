use std::fmt::{self, Display};

/// The banner written at the top of every managed file under the default
/// configuration.
pub const DEFAULT: &str = "// WARNING: DO NOT EDIT THIS FILE. THIS FILE IS MANAGED BY SPRING ROO.\n\n";

/// Warning comment prepended to files the tool owns.
///
/// Built once from [`Config::tool`](crate::Config::tool) and never mutated
/// afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Banner {
    text: String,
}

impl Banner {
    pub fn new(tool: &str) -> Self {
        Banner {
            text: format!(
                "// WARNING: DO NOT EDIT THIS FILE. THIS FILE IS MANAGED BY {}.\n\n",
                tool,
            ),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn prepend(&self, contents: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + contents.len());
        out.push_str(&self.text);
        out.push_str(contents);
        out
    }
}

impl Default for Banner {
    fn default() -> Self {
        Banner {
            text: DEFAULT.to_owned(),
        }
    }
}

impl Display for Banner {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

#[test]
fn test_default_banner() {
    assert_eq!(Banner::new("SPRING ROO").as_str(), DEFAULT);
    assert_eq!(Banner::default(), Banner::new("SPRING ROO"));
}

#[test]
fn test_prepend() {
    let banner = Banner::new("GENFILE");
    assert_eq!(
        banner.prepend("class Foo {}"),
        "// WARNING: DO NOT EDIT THIS FILE. THIS FILE IS MANAGED BY GENFILE.\n\nclass Foo {}",
    );
    assert_eq!(banner.prepend(""), banner.as_str());
}
