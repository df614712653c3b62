//! Gesture recognizers
//!
//! Recognizers analyze pointer event streams and detect specific gestures.

pub mod double_tap;
pub mod drag;
pub mod long_press;
pub mod multi_tap;
pub mod recognizer;
pub mod scale;
pub mod tap;






pub use recognizer::{
    constants, GestureRecognizer, GestureRecognizerState, GestureState,
};
pub use tap::TapGestureRecognizer;
pub use double_tap::DoubleTapGestureRecognizer;
pub use drag::DragGestureRecognizer;
pub use long_press::LongPressGestureRecognizer;
pub use multi_tap::MultiTapGestureRecognizer;
pub use scale::ScaleGestureRecognizer;






