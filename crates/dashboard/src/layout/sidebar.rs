//! Sidebar drawer state machine
//!
//! States are {mobile, desktop} x {open, closed}. Mobile and desktop keep
//! separate open flags: the mobile drawer is an overlay that is reset to
//! closed whenever the device class flips, while the desktop column keeps
//! its state for the session (it is not persisted).

use log::debug;
use std::time::Duration;

use super::DeviceClass;

/// Request to notify dependents after a desktop layout change
///
/// Produced by [`SidebarState::toggle`]; the caller delivers it after
/// `delay` with whatever timer it has, so the drawer transition finishes
/// before charts and tables re-measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeNotice {
    /// Render epoch at the time of the toggle
    pub epoch: u64,
    pub delay: Duration,
}

impl ResizeNotice {
    /// False once a later toggle has superseded this notice
    pub fn is_current(&self, state: &SidebarState) -> bool {
        state.render_epoch() == self.epoch
    }
}

/// Drawer open/closed state per device class
#[derive(Debug, Clone)]
pub struct SidebarState {
    device: DeviceClass,
    mobile_open: bool,
    desktop_open: bool,
    render_epoch: u64,
    resize_delay: Duration,
}

impl SidebarState {
    /// Start on `device` with the mobile drawer closed and the desktop column open
    pub fn new(device: DeviceClass, resize_delay: Duration) -> Self {
        Self {
            device,
            mobile_open: false,
            desktop_open: true,
            render_epoch: 0,
            resize_delay,
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    /// Open flag for the current device class
    pub fn is_open(&self) -> bool {
        match self.device {
            DeviceClass::Mobile => self.mobile_open,
            DeviceClass::Desktop => self.desktop_open,
        }
    }

    /// Counter bumped on every desktop toggle; dependents key redraws on it
    pub fn render_epoch(&self) -> u64 {
        self.render_epoch
    }

    /// Reclassify from a new viewport width. Returns true if the class changed.
    pub fn set_viewport_width(&mut self, width: f32, breakpoint: f32) -> bool {
        self.set_device_class(DeviceClass::from_width(width, breakpoint))
    }

    /// Switch device class, closing the mobile overlay on any change.
    /// Returns true if the class changed.
    pub fn set_device_class(&mut self, device: DeviceClass) -> bool {
        if device == self.device {
            return false;
        }
        debug!("Device class {:?} -> {:?}", self.device, device);
        self.device = device;
        self.mobile_open = false;
        true
    }

    /// Flip the drawer for the current device class
    ///
    /// On desktop this also bumps the render epoch and returns the resize
    /// notice to deliver once the transition has finished.
    pub fn toggle(&mut self) -> Option<ResizeNotice> {
        match self.device {
            DeviceClass::Mobile => {
                self.mobile_open = !self.mobile_open;
                None
            }
            DeviceClass::Desktop => {
                self.desktop_open = !self.desktop_open;
                self.render_epoch += 1;
                debug!(
                    "Desktop sidebar {} (epoch {})",
                    if self.desktop_open { "opened" } else { "closed" },
                    self.render_epoch
                );
                Some(ResizeNotice {
                    epoch: self.render_epoch,
                    delay: self.resize_delay,
                })
            }
        }
    }

    /// Close the mobile drawer; the desktop column is left as is
    pub fn close(&mut self) {
        self.mobile_open = false;
    }
}
