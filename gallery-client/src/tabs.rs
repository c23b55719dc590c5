use crate::error::ClientError;

/// Region selector buttons and their content sections.
///
/// Only an index is stored, so at most one button and one section can be
/// active at any time, and they always name the same region.
#[derive(Debug, Clone)]
pub struct RegionTabs {
    regions: Vec<String>,
    active: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionButton<'a> {
    pub region: &'a str,
    pub active: bool,
}

impl RegionButton<'_> {
    /// Value of the button's `aria-selected` attribute.
    pub fn aria_selected(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSection<'a> {
    pub region: &'a str,
    pub visible: bool,
}

impl RegionTabs {
    /// `initially_active` is the region marked active before any interaction.
    pub fn new<I, S>(regions: I, initially_active: Option<&str>) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tabs = Self {
            regions: regions.into_iter().map(Into::into).collect(),
            active: None,
        };
        if let Some(region) = initially_active {
            tabs.select(region)?;
        }
        Ok(tabs)
    }

    /// Activates `region` and deactivates every other one. An unknown region
    /// leaves the current selection untouched.
    pub fn select(&mut self, region: &str) -> Result<(), ClientError> {
        let index = self
            .regions
            .iter()
            .position(|r| r == region)
            .ok_or_else(|| ClientError::UnknownRegion(region.to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.regions[i].as_str())
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn buttons(&self) -> impl Iterator<Item = RegionButton<'_>> + '_ {
        self.regions.iter().enumerate().map(|(i, region)| RegionButton {
            region,
            active: self.active == Some(i),
        })
    }

    pub fn sections(&self) -> impl Iterator<Item = RegionSection<'_>> + '_ {
        self.regions.iter().enumerate().map(|(i, region)| RegionSection {
            region,
            visible: self.active == Some(i),
        })
    }
}
