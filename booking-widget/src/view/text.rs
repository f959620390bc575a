pub const SELECT_TYPE_AND_DATE: &str = "予約種別と希望日を選択してください。";
pub const SEARCHING_SLOTS: &str = "空き時間を検索中...";
pub const NO_SLOTS: &str = "申し訳ありませんが、この日は予約可能な時間枠がありません。";
pub const SLOTS_FAILED_PREFIX: &str = "空き時間の取得に失敗しました: ";

pub const BOOKING_SUBMIT_LABEL: &str = "予約を確定する";
pub const MANAGE_SUBMIT_LABEL: &str = "実行";
pub const PROCESSING_LABEL: &str = "処理中...";
pub const COMPLETE_LABEL: &str = "処理完了！";

pub const ERROR_PREFIX: &str = "エラー: ";
pub const IDENTITY_INIT_FAILED: &str = "LIFFの初期化に失敗しました。画面を再読み込みしてください。";
pub const EXISTING_RESERVATION: &str = "お客様は既に有効なご予約が1件あります。\n内容の変更・キャンセルは下の「予約変更・キャンセル」タブからお手続きください。";

pub fn reservation_id_suffix(reservation_id: &str) -> String {
    format!(" (予約ID: {})", reservation_id)
}

pub fn remaining_label(available_count: u32) -> String {
    format!("(残り{}枠)", available_count)
}
