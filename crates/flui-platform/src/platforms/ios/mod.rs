//! iOS platform implementation (stub)
//!
//! This module provides a stub implementation of the Platform trait for iOS.
//! It serves as a placeholder for future native iOS integration using:
//!
//! - **UIKit**: UIWindow, UIView, UIViewController
//! - **Core Animation**: CALayer, CAMetalLayer for compositing
//! - **Metal**: Apple's GPU API via wgpu
//! - **Grand Central Dispatch (GCD)**: For async task execution
//! - **Core Text**: For text rendering
//!
//! # Current Status
//!
//! ⚠️ **NOT IMPLEMENTED** - This is a stub that returns `unimplemented!()` for all operations.
//!
//! # Implementation Roadmap
//!
//! ## Core Integration
//!
//! 1. **App & View Lifecycle**:
//!    - UIApplicationDelegate for app lifecycle
//!    - UISceneDelegate for multi-window (iOS 13+)
//!    - UIViewController for view hierarchy
//!    - View lifecycle (viewDidLoad, viewWillAppear, viewDidAppear, etc.)
//!    - App states (background, foreground, suspended)
//!
//! 2. **Window Management**:
//!    - UIWindow for top-level container
//!    - UIScreen for display information
//!    - Multi-window support (iPadOS 13+)
//!    - Split View / Slide Over (iPad)
//!    - Safe Area handling (notch, home indicator)
//!    - Keyboard avoidance
//!
//! 3. **Input System**:
//!    - UITouch for touch events
//!    - Multi-touch with gesture recognizers
//!    - UIGestureRecognizer (tap, pan, pinch, rotate, swipe, long-press)
//!    - 3D Touch / Haptic Touch
//!    - Apple Pencil support (pressure, tilt, azimuth)
//!    - Physical keyboard (Smart Keyboard, Magic Keyboard)
//!    - Trackpad/mouse support (iOS 13.4+)
//!
//! 4. **Rendering**:
//!    - CAMetalLayer for Metal rendering
//!    - wgpu Metal backend
//!    - HDR support (iPhone 12+)
//!    - ProMotion (120Hz on iPad Pro, iPhone 13 Pro+)
//!    - Wide color gamut (Display P3)
//!
//! ## Platform Services
//!
//! 5. **Display & Graphics**:
//!    - UIScreen for display metrics
//!    - Scale factor (1x, 2x, 3x for Retina)
//!    - Safe area insets (UIEdgeInsets)
//!    - Screen bounds and native bounds
//!    - Dark mode (UIUserInterfaceStyle)
//!
//! 6. **Text System**:
//!    - Core Text for text rendering
//!    - UIFont for system fonts
//!    - Text Kit for advanced text layout
//!    - UITextInput protocol for keyboard input
//!    - Emoji and international text support
//!
//! 7. **System Integration**:
//!    - UIPasteboard for clipboard
//!    - UIHapticFeedback for haptics
//!    - UINotification for local notifications
//!    - UIActivityViewController for sharing
//!    - Document picker (UIDocumentPickerViewController)
//!    - Photo library access (PHPickerViewController)
//!
//! 8. **Async & Threading**:
//!    - Grand Central Dispatch (GCD) for background tasks
//!    - Main queue (DispatchQueue.main) for UI updates
//!    - Tokio integration for Rust async
//!
//! ## iOS-Specific Features
//!
//! 9. **Mobile Capabilities**:
//!    - Battery status (UIDevice.batteryState)
//!    - Network reachability (NWPathMonitor)
//!    - Picture-in-Picture (AVPictureInPictureController)
//!    - Background refresh
//!    - Push notifications (UserNotifications framework)
//!    - App extensions
//!    - WidgetKit integration
//!    - App Clips
//!
//! 10. **Apple Ecosystem**:
//!     - Handoff / Continuity
//!     - iCloud integration
//!     - Sign in with Apple
//!     - Apple Pay
//!     - HealthKit, HomeKit, etc.
//!
//! # Usage
//!
//! Currently, attempting to use this platform will panic. For iOS development,
//! use the winit-based backend or wait for native implementation.
//!
//! ```rust,ignore
//! #[cfg(target_os = "ios")]
//! use flui_platform::IOSPlatform;
//!
//! // This will panic with "not implemented"
//! let platform = IOSPlatform::new();
//! ```
//!
//! # Dependencies (Future)
//!
//! When implemented, will require:
//! - `objc = "0.2"` - Objective-C runtime bindings
//! - `block = "0.1"` - Objective-C block support
//! - `cocoa-foundation = "0.1"` - Foundation framework
//! - `core-graphics = "0.22"` - Core Graphics bindings
//! - `icrate` - Modern Objective-C 2.0 bindings

use crate::traits::*;
use anyhow::Result;
use std::sync::Arc;

/// iOS platform implementation (stub)
///
/// This is a placeholder for future native iOS support. All methods
/// currently return `unimplemented!()`.
///
/// # Future Implementation
///
/// Will use UIKit + Metal:
/// - `UIWindow` for window management
/// - `UIViewController` for view hierarchy
/// - `CAMetalLayer` for Metal rendering
/// - `GCD` for async execution
/// - `Core Text` for text rendering
///
/// # iOS Versions
///
/// Target: iOS 13+ (97% market share)
/// - iOS 13: Multi-window, dark mode, SwiftUI
/// - iOS 14: Widgets, App Clips, App Library
/// - iOS 15: Focus modes, SharePlay
/// - iOS 16: Lock Screen customization
/// - iOS 17: StandBy mode, NameDrop
pub struct IOSPlatform;

impl IOSPlatform {
    /// Create a new iOS platform instance (stub)
    ///
    /// # Panics
    ///
    /// Always panics with "iOS platform not yet implemented"
    pub fn new() -> Result<Self> {
        unimplemented!("iOS platform not yet implemented - use winit backend or wait for native UIKit implementation")
    }

    /// Initialize from UIApplication
    ///
    /// # Panics
    ///
    /// Always panics (stub implementation)
    pub fn from_application(_app: ()) -> Result<Self> {
        unimplemented!("iOS UIApplication initialization not implemented")
    }
}

impl Platform for IOSPlatform {
    fn background_executor(&self) -> Arc<dyn PlatformExecutor> {
        unimplemented!("iOS GCD executor not implemented")
    }

    fn foreground_executor(&self) -> Arc<dyn PlatformExecutor> {
        unimplemented!("iOS main queue executor not implemented")
    }

    fn text_system(&self) -> Arc<dyn PlatformTextSystem> {
        unimplemented!("iOS Core Text system not implemented")
    }

    fn run(&self, _on_finish_launching: Box<dyn FnOnce()>) {
        unimplemented!("iOS UIApplicationMain run loop not implemented")
    }

    fn quit(&self) {
        unimplemented!("iOS quit (not recommended by Apple) not implemented")
    }

    fn request_frame(&self) {
        unimplemented!("iOS CADisplayLink frame request not implemented")
    }

    fn active_window(&self) -> Option<WindowId> {
        unimplemented!("iOS active window query not implemented")
    }

    fn displays(&self) -> Vec<Arc<dyn PlatformDisplay>> {
        unimplemented!("iOS UIScreen enumeration not implemented")
    }

    fn primary_display(&self) -> Option<Arc<dyn PlatformDisplay>> {
        unimplemented!("iOS main screen query not implemented")
    }

    fn open_window(&self, _options: WindowOptions) -> Result<Box<dyn PlatformWindow>> {
        unimplemented!("iOS UIWindow creation not implemented")
    }

    fn clipboard(&self) -> Arc<dyn Clipboard> {
        unimplemented!("iOS UIPasteboard not implemented")
    }

    fn capabilities(&self) -> &dyn PlatformCapabilities {
        unimplemented!("iOS capabilities not implemented")
    }

    fn name(&self) -> &'static str {
        "iOS (stub)"
    }

    fn on_quit(&self, _callback: Box<dyn FnMut() + Send>) {
        unimplemented!("iOS quit callback not implemented")
    }

    fn on_window_event(&self, _callback: Box<dyn FnMut(WindowEvent) + Send>) {
        unimplemented!("iOS window event callback not implemented")
    }

    fn app_path(&self) -> Result<std::path::PathBuf> {
        unimplemented!("iOS app bundle path query not implemented")
    }
}

// TODO: Implement these when adding native iOS support:
//
// Core:
// - IOSWindow wrapping UIWindow
// - IOSDisplay wrapping UIScreen
// - GCDExecutor using Grand Central Dispatch
// - CoreTextSystem using Core Text
//
// Input:
// - Touch event handling (UITouch)
// - Multi-touch with gesture recognizers
// - Apple Pencil support
// - Keyboard input (UITextInput)
//
// Lifecycle:
// - UIApplicationDelegate callbacks
// - UISceneDelegate for multi-window
// - View lifecycle integration
// - Background/foreground transitions
//
// Services:
// - UIPasteboard via objc
// - UIHapticFeedback
// - UIActivityViewController for sharing
// - Document/photo pickers
//
// Integration:
// - Objective-C bridge (objc/icrate)
// - CAMetalLayer for wgpu
// - Safe area handling
// - Keyboard avoidance
