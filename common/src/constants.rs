//tag prepended to every outbound message body
pub const MESSAGE_TAG: &str = "[Navi.AI] ";

//utf-8 byte limit for the raw message body
pub const MAX_MESSAGE_BYTES: usize = 80;

//recipient numbers must carry one of these national prefixes
pub const ACCEPTED_PHONE_PREFIXES: [&str; 2] = ["+8210", "+82010"];

//registered user ids are plain digit strings of this shape
pub const USER_ID_PATTERN: &str = "^[0-9]{8,12}$";
