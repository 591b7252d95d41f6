//! Catalogue of text slots in the preview screens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Preview screen a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreviewTab {
    Examples,
    Dashboard,
    Tasks,
    Landing,
    Article,
}

impl PreviewTab {
    pub const ALL: [PreviewTab; 5] = [
        PreviewTab::Examples,
        PreviewTab::Dashboard,
        PreviewTab::Tasks,
        PreviewTab::Landing,
        PreviewTab::Article,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PreviewTab::Examples => "examples",
            PreviewTab::Dashboard => "dashboard",
            PreviewTab::Tasks => "tasks",
            PreviewTab::Landing => "landing",
            PreviewTab::Article => "article",
        }
    }

    /// Heading shown above the tab's slot list.
    pub fn title(self) -> &'static str {
        match self {
            PreviewTab::Examples => "Text styles for Cards",
            PreviewTab::Dashboard => "Text styles for Dashboard",
            PreviewTab::Tasks => "Text styles for Table",
            PreviewTab::Landing => "Text styles for Landing",
            PreviewTab::Article => "Text styles for Article",
        }
    }

    pub fn slots(self) -> impl Iterator<Item = SlotId> {
        SlotId::ALL.into_iter().filter(move |slot| slot.tab() == self)
    }
}

impl fmt::Display for PreviewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewTab {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PreviewTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSlot {
                kind: "preview tab",
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownSlot {
    pub kind: &'static str,
    pub name: String,
}

/// A text element in one of the preview screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    DashboardTitle,
    DashboardDownloadBtn,
    DashboardTabs,
    DashboardCardTitle,
    DashboardCardValue,
    DashboardCardDescription,
    DashboardSectionTitle,
    DashboardSectionDescription,
    DashboardTableHeader,
    DashboardTableCell,
    ExamplesCardTitle,
    ExamplesCardDescription,
    ExamplesLabel,
    ExamplesInput,
    ExamplesButton,
    TasksTitle,
    TasksDescription,
    TasksFilterInput,
    TasksFilterButton,
    TasksTableHeader,
    TasksTableCell,
    TasksPagination,
    LandingBadge,
    LandingHeading,
    LandingHeading2,
    LandingDescription,
    LandingButtonPrimary,
    LandingButtonSecondary,
    LandingFeatureTitle,
    LandingFeatureDescription,
    ArticleTitle,
    ArticleMeta,
    ArticleBody,
    ArticleHeading2,
    ArticleHeading3,
    ArticleListItem,
    ArticleBlockquote,
}

impl SlotId {
    pub const ALL: [SlotId; 37] = [
        SlotId::DashboardTitle,
        SlotId::DashboardDownloadBtn,
        SlotId::DashboardTabs,
        SlotId::DashboardCardTitle,
        SlotId::DashboardCardValue,
        SlotId::DashboardCardDescription,
        SlotId::DashboardSectionTitle,
        SlotId::DashboardSectionDescription,
        SlotId::DashboardTableHeader,
        SlotId::DashboardTableCell,
        SlotId::ExamplesCardTitle,
        SlotId::ExamplesCardDescription,
        SlotId::ExamplesLabel,
        SlotId::ExamplesInput,
        SlotId::ExamplesButton,
        SlotId::TasksTitle,
        SlotId::TasksDescription,
        SlotId::TasksFilterInput,
        SlotId::TasksFilterButton,
        SlotId::TasksTableHeader,
        SlotId::TasksTableCell,
        SlotId::TasksPagination,
        SlotId::LandingBadge,
        SlotId::LandingHeading,
        SlotId::LandingHeading2,
        SlotId::LandingDescription,
        SlotId::LandingButtonPrimary,
        SlotId::LandingButtonSecondary,
        SlotId::LandingFeatureTitle,
        SlotId::LandingFeatureDescription,
        SlotId::ArticleTitle,
        SlotId::ArticleMeta,
        SlotId::ArticleBody,
        SlotId::ArticleHeading2,
        SlotId::ArticleHeading3,
        SlotId::ArticleListItem,
        SlotId::ArticleBlockquote,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::DashboardTitle => "dashboard-title",
            SlotId::DashboardDownloadBtn => "dashboard-download-btn",
            SlotId::DashboardTabs => "dashboard-tabs",
            SlotId::DashboardCardTitle => "dashboard-card-title",
            SlotId::DashboardCardValue => "dashboard-card-value",
            SlotId::DashboardCardDescription => "dashboard-card-description",
            SlotId::DashboardSectionTitle => "dashboard-section-title",
            SlotId::DashboardSectionDescription => "dashboard-section-description",
            SlotId::DashboardTableHeader => "dashboard-table-header",
            SlotId::DashboardTableCell => "dashboard-table-cell",
            SlotId::ExamplesCardTitle => "examples-card-title",
            SlotId::ExamplesCardDescription => "examples-card-description",
            SlotId::ExamplesLabel => "examples-label",
            SlotId::ExamplesInput => "examples-input",
            SlotId::ExamplesButton => "examples-button",
            SlotId::TasksTitle => "tasks-title",
            SlotId::TasksDescription => "tasks-description",
            SlotId::TasksFilterInput => "tasks-filter-input",
            SlotId::TasksFilterButton => "tasks-filter-button",
            SlotId::TasksTableHeader => "tasks-table-header",
            SlotId::TasksTableCell => "tasks-table-cell",
            SlotId::TasksPagination => "tasks-pagination",
            SlotId::LandingBadge => "landing-badge",
            SlotId::LandingHeading => "landing-heading",
            SlotId::LandingHeading2 => "landing-heading-2",
            SlotId::LandingDescription => "landing-description",
            SlotId::LandingButtonPrimary => "landing-button-primary",
            SlotId::LandingButtonSecondary => "landing-button-secondary",
            SlotId::LandingFeatureTitle => "landing-feature-title",
            SlotId::LandingFeatureDescription => "landing-feature-description",
            SlotId::ArticleTitle => "article-title",
            SlotId::ArticleMeta => "article-meta",
            SlotId::ArticleBody => "article-body",
            SlotId::ArticleHeading2 => "article-heading-2",
            SlotId::ArticleHeading3 => "article-heading-3",
            SlotId::ArticleListItem => "article-list-item",
            SlotId::ArticleBlockquote => "article-blockquote",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotId::DashboardTitle => "Dashboard Title",
            SlotId::DashboardDownloadBtn => "Download Button",
            SlotId::DashboardTabs => "Tab Labels",
            SlotId::DashboardCardTitle | SlotId::ExamplesCardTitle => "Card Title",
            SlotId::DashboardCardValue => "Card Value",
            SlotId::DashboardCardDescription | SlotId::ExamplesCardDescription => {
                "Card Description"
            }
            SlotId::DashboardSectionTitle => "Section Title",
            SlotId::DashboardSectionDescription => "Section Description",
            SlotId::DashboardTableHeader | SlotId::TasksTableHeader => "Table Header",
            SlotId::DashboardTableCell | SlotId::TasksTableCell => "Table Cell",
            SlotId::ExamplesLabel => "Label",
            SlotId::ExamplesInput => "Input",
            SlotId::ExamplesButton => "Button",
            SlotId::TasksTitle | SlotId::ArticleTitle => "Title",
            SlotId::TasksDescription => "Description",
            SlotId::TasksFilterInput => "Filter Input",
            SlotId::TasksFilterButton => "Filter Button",
            SlotId::TasksPagination => "Pagination",
            SlotId::LandingBadge => "Badge",
            SlotId::LandingHeading => "Main Heading",
            SlotId::LandingHeading2 => "Section Heading",
            SlotId::LandingDescription => "Hero Description",
            SlotId::LandingButtonPrimary => "Primary Button",
            SlotId::LandingButtonSecondary => "Secondary Button",
            SlotId::LandingFeatureTitle => "Feature Title",
            SlotId::LandingFeatureDescription => "Feature Description",
            SlotId::ArticleMeta => "Meta",
            SlotId::ArticleBody => "Body",
            SlotId::ArticleHeading2 => "Heading 2",
            SlotId::ArticleHeading3 => "Heading 3",
            SlotId::ArticleListItem => "List Item",
            SlotId::ArticleBlockquote => "Blockquote",
        }
    }

    pub fn tab(self) -> PreviewTab {
        match self {
            SlotId::DashboardTitle
            | SlotId::DashboardDownloadBtn
            | SlotId::DashboardTabs
            | SlotId::DashboardCardTitle
            | SlotId::DashboardCardValue
            | SlotId::DashboardCardDescription
            | SlotId::DashboardSectionTitle
            | SlotId::DashboardSectionDescription
            | SlotId::DashboardTableHeader
            | SlotId::DashboardTableCell => PreviewTab::Dashboard,
            SlotId::ExamplesCardTitle
            | SlotId::ExamplesCardDescription
            | SlotId::ExamplesLabel
            | SlotId::ExamplesInput
            | SlotId::ExamplesButton => PreviewTab::Examples,
            SlotId::TasksTitle
            | SlotId::TasksDescription
            | SlotId::TasksFilterInput
            | SlotId::TasksFilterButton
            | SlotId::TasksTableHeader
            | SlotId::TasksTableCell
            | SlotId::TasksPagination => PreviewTab::Tasks,
            SlotId::LandingBadge
            | SlotId::LandingHeading
            | SlotId::LandingHeading2
            | SlotId::LandingDescription
            | SlotId::LandingButtonPrimary
            | SlotId::LandingButtonSecondary
            | SlotId::LandingFeatureTitle
            | SlotId::LandingFeatureDescription => PreviewTab::Landing,
            SlotId::ArticleTitle
            | SlotId::ArticleMeta
            | SlotId::ArticleBody
            | SlotId::ArticleHeading2
            | SlotId::ArticleHeading3
            | SlotId::ArticleListItem
            | SlotId::ArticleBlockquote => PreviewTab::Article,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotId {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SlotId::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSlot {
                kind: "slot",
                name: s.to_string(),
            })
    }
}
