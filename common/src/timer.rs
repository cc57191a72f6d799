//! エラー自動消去タイマー
//!
//! 実際のタイマー実装（ブラウザの setTimeout など）はフロントエンド側に置き、
//! ここでは「同時に保留できるのは1つだけ」というルールのみを持つ。

use crate::matching::TimerEffect;
use serde::{Deserialize, Serialize};

/// エラー表示を自動で消すまでの時間（ミリ秒）
pub const ERROR_CLEAR_DELAY_MS: u32 = 1500;

/// エラー消去の予約番号
///
/// エラーが発生するたびに採番される。古い番号での消去要求は無視される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ClearTicket(pub u64);

impl ClearTicket {
    pub fn next(self) -> Self {
        ClearTicket(self.0.wrapping_add(1))
    }
}

/// キャンセル可能な保留タイマー
pub trait CancelHandle {
    fn cancel(self);
}

/// 保留タイマーを最大1つ保持するスロット
///
/// 新しいタイマーを登録すると前のものはキャンセルされる。
/// スロットが破棄されたとき（ビュー離脱時）も保留中のタイマーをキャンセルする。
#[derive(Debug)]
pub struct TimerSlot<H: CancelHandle> {
    pending: Option<H>,
}

impl<H: CancelHandle> TimerSlot<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// タイマーを登録（保留中のものはキャンセル）
    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.pending = Some(handle);
    }

    /// 保留中のタイマーをキャンセル
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    /// タイマー発火後に呼ぶ（キャンセルせずに手放す）
    pub fn fired(&mut self) {
        self.pending = None;
    }

    /// 状態遷移の結果をスロットに反映
    ///
    /// `Schedule` なら `schedule` で作ったタイマーを登録し（保留中のものはキャンセル）、
    /// `Cancel` なら保留中のタイマーをキャンセルする。
    pub fn apply<F>(&mut self, effect: TimerEffect, schedule: F)
    where
        F: FnOnce(ClearTicket) -> H,
    {
        match effect {
            TimerEffect::Schedule(ticket) => self.arm(schedule(ticket)),
            TimerEffect::Cancel => self.cancel(),
            TimerEffect::None => {}
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: CancelHandle> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: CancelHandle> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::matching::{reduce, MatchAction, MatchState};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeHandle {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelHandle for FakeHandle {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn handle(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeHandle {
        FakeHandle { id, log: Rc::clone(log) }
    }

    #[test]
    fn test_arm_cancels_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();

        slot.arm(handle(1, &log));
        assert!(log.borrow().is_empty());

        slot.arm(handle(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_armed());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();

        slot.arm(handle(7, &log));
        slot.cancel();
        slot.cancel();
        assert_eq!(*log.borrow(), vec![7]);
        assert!(!slot.is_armed());
    }

    #[test]
    fn test_drop_cancels_pending() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = TimerSlot::new();
            slot.arm(handle(3, &log));
        }
        assert_eq!(*log.borrow(), vec![3]);
    }

    #[test]
    fn test_fired_releases_without_cancel() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();

        slot.arm(handle(4, &log));
        slot.fired();
        drop(slot);
        assert!(log.borrow().is_empty());
    }

    /// 予約番号をIDにしたハンドルで reduce の結果を適用
    fn apply(
        slot: &mut TimerSlot<FakeHandle>,
        state: &mut MatchState,
        catalog: &Catalog,
        action: MatchAction,
        log: &Rc<RefCell<Vec<u32>>>,
    ) {
        let effect = reduce(state, catalog, action);
        slot.apply(effect, |ticket| handle(ticket.0 as u32, log));
    }

    fn source(name: &str) -> MatchAction {
        MatchAction::SelectSource(name.to_string())
    }

    fn target(name: &str) -> MatchAction {
        MatchAction::SelectTarget(name.to_string())
    }

    #[test]
    fn test_apply_second_error_cancels_first() {
        let catalog = Catalog::standard();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();
        let mut state = MatchState::new();

        apply(&mut slot, &mut state, &catalog, source("CLIP"), &log);
        apply(&mut slot, &mut state, &catalog, target("VAE"), &log);
        assert!(slot.is_armed());
        assert!(log.borrow().is_empty());

        apply(&mut slot, &mut state, &catalog, target("MODEL"), &log);
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_armed());
    }

    #[test]
    fn test_apply_reset_cancels_pending() {
        let catalog = Catalog::standard();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();
        let mut state = MatchState::new();

        apply(&mut slot, &mut state, &catalog, target("LATENT"), &log);
        assert!(slot.is_armed());

        apply(&mut slot, &mut state, &catalog, MatchAction::Reset, &log);
        assert_eq!(*log.borrow(), vec![1]);
        assert!(!slot.is_armed());
        assert_eq!(state.transient_error(), None);
    }

    #[test]
    fn test_apply_correct_match_cancels_pending() {
        let catalog = Catalog::standard();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();
        let mut state = MatchState::new();

        apply(&mut slot, &mut state, &catalog, source("IMAGE"), &log);
        apply(&mut slot, &mut state, &catalog, target("LATENT"), &log);
        assert!(slot.is_armed());

        apply(&mut slot, &mut state, &catalog, target("IMAGE"), &log);
        assert_eq!(*log.borrow(), vec![1]);
        assert!(!slot.is_armed());
        assert!(state.is_matched("IMAGE"));
    }

    #[test]
    fn test_apply_fired_then_clear() {
        let catalog = Catalog::standard();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new();
        let mut state = MatchState::new();

        apply(&mut slot, &mut state, &catalog, target("VAE"), &log);
        let ticket = state.error_ticket();

        // 発火時はキャンセルせずに手放してから消去
        slot.fired();
        apply(&mut slot, &mut state, &catalog, MatchAction::ClearError(ticket), &log);
        assert!(log.borrow().is_empty());
        assert!(!slot.is_armed());
        assert_eq!(state.transient_error(), None);
    }

    #[test]
    fn test_ticket_next() {
        assert_eq!(ClearTicket::default().next(), ClearTicket(1));
        assert_eq!(ClearTicket(u64::MAX).next(), ClearTicket(0));
    }
}
