/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public RongCloud server API crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod client;
pub mod http;

// Re-export the facade and its configuration
pub use client::{Format, IM_API_URL, RongCloud, SMS_API_URL};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Dispatcher,
    Result,
    RongCloudError,
    SignedContext,
};

// Re-export resource modules and their request types
pub use api::{
    BroadcastMessage,
    ChatRoom,
    Group,
    GroupMessage,
    Message,
    PrivateMessage,
    Push,
    SensitiveWord,
    Sms,
    SystemMessage,
    User,
};
