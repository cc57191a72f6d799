//! ブラウザ用のエラー消去タイマー

use artificer_common::{CancelHandle, ERROR_CLEAR_DELAY_MS};
use gloo::timers::callback::Timeout;

/// `setTimeout` の保留ハンドル
pub struct ErrorTimer(Timeout);

impl ErrorTimer {
    /// エラー表示時間の経過後に `callback` を呼ぶ
    pub fn schedule<F>(callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self(Timeout::new(ERROR_CLEAR_DELAY_MS, callback))
    }
}

impl CancelHandle for ErrorTimer {
    fn cancel(self) {
        // 戻り値のクロージャは不要
        let _ = self.0.cancel();
    }
}
