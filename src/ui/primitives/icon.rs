use crossterm::style::Stylize;

use crate::ui::theme;
use sitetask::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Build,
    Clean,
    Deploy,
    Serve,
    Watch,
    List,
}

impl Icon {
    /// Header icon for an operation
    pub fn for_operation(operation: Operation) -> Self {
        match operation {
            Operation::Build | Operation::Rebuild | Operation::Default => Icon::Build,
            Operation::Clean => Icon::Clean,
            Operation::Deploy => Icon::Deploy,
            Operation::Serve => Icon::Serve,
            Operation::Watch => Icon::Watch,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Build) => theme::icons::BUILD,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Serve) => theme::icons::SERVE,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::List) => theme::icons::LIST,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Serve) => theme::icons_ascii::SERVE,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::List) => theme::icons_ascii::LIST,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Build | Icon::Clean | Icon::Deploy | Icon::Serve | Icon::Watch | Icon::List => {
                theme::colors::INFO
            }
        };
        format!("{}", s.with(color))
    }
}
