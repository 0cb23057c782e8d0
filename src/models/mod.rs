mod notification;

pub use notification::{
    Action, Followup, Notification, NotificationResult, Target, TargetType,
};
