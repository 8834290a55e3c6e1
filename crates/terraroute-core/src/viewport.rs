// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

/// Which dimensions moved on a resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportChange {
    pub width: bool,
    pub height: bool,
}

impl ViewportChange {
    pub fn any(&self) -> bool {
        self.width || self.height
    }
}

/// Content-area size of the globe container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportTracker {
    width: u32,
    height: u32,
}

impl ViewportTracker {
    /// Initial measurement taken on mount.
    pub fn mount(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ViewportChange {
        let change = ViewportChange {
            width: width != self.width,
            height: height != self.height,
        };
        self.width = width;
        self.height = height;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_reports_changed_dimensions() {
        let mut vp = ViewportTracker::mount(1280, 720);
        assert_eq!(vp.resize(1280, 600), ViewportChange { width: false, height: true });
        assert_eq!(vp.resize(900, 600), ViewportChange { width: true, height: false });
        assert!(!vp.resize(900, 600).any());
        assert_eq!(vp.size(), (900, 600));
    }
}
