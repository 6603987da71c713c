pub mod vec_notification_queue;

pub use vec_notification_queue::VecNotificationQueue;
