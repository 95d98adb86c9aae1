use crate::server::{
    error::AppError,
    model::video_call::{CallStatus, CallType},
    service::{
        test::domain_user,
        video_call::{MeetingRoom, VideoCallService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_call;
mod join;

fn room(password: Option<&str>) -> MeetingRoom {
    MeetingRoom {
        room_name: "Weekly sync".to_string(),
        description: None,
        max_participants: 2,
        is_public: true,
        password: password.map(str::to_string),
    }
}
