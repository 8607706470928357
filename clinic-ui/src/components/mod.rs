//! UI Components
//!
//! Landing page sections, booking forms, modals and shared widgets.

pub mod about;
pub mod appointment_form;
pub mod blog;
pub mod field;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod login_modal;
pub mod modal;
pub mod nav;
pub mod qualifications;
pub mod scroll_to_top;
pub mod services;
pub mod testimonials;
pub mod toast;
pub mod video_call_modal;

pub use about::About;
pub use appointment_form::AppointmentForm;
pub use blog::Blog;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::Loading;
pub use login_modal::LoginModal;
pub use nav::Nav;
pub use qualifications::Qualifications;
pub use scroll_to_top::ScrollToTop;
pub use services::Services;
pub use testimonials::Testimonials;
pub use toast::Toast;
pub use video_call_modal::VideoCallModal;
