use clap::{Args, ValueEnum};

use crate::content::{self, InfoPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AboutTopic {
    /// Tentang Sekolah
    School,
    /// Tentang K-Means Cluster
    Algorithm,
}

impl AboutTopic {
    fn page(self) -> &'static InfoPage {
        match self {
            Self::School => &content::SCHOOL_PAGE,
            Self::Algorithm => &content::ALGORITHM_PAGE,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct AboutArg {
    /// Page to print
    #[arg(value_enum)]
    topic: AboutTopic,
}

pub(crate) fn run(arg: &AboutArg) {
    for line in arg.topic.page().plain_lines() {
        println!("{line}");
    }
}
