//! User-facing copy. The page ships in Korean only.

pub const MISSING_FIELD: &str = "모든 필드를 입력해주세요.";
pub const INVALID_EMAIL: &str = "올바른 이메일 주소를 입력해주세요.";
pub const SUBMIT_SUCCESS: &str = "메시지가 성공적으로 전송되었습니다!";
pub const SUBMIT_SENDING: &str = "전송 중...";
pub const SUBMIT_LABEL: &str = "메시지 보내기";

pub const DOWNLOAD_IOS: &str = "iOS 버전은 곧 출시 예정입니다!";
pub const DOWNLOAD_ANDROID: &str = "Android 버전 다운로드를 준비 중입니다...";

pub const NOTIFICATION_CLOSE: &str = "×";
