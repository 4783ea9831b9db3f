//! Chooser state machine.
//!
//! Defines a pure state transition function for the one-shot disambiguation
//! flow: a presented chooser waits indefinitely for exactly one of "user
//! picked an entry", "user dismissed", or "the hosting screen went away".
//!
//! The service layer feeds UI callbacks in as events and executes the
//! returned actions; action order is significant: the cache write is
//! emitted before the listener notification.
//!
//! 纯状态机：不包含副作用。动作顺序即执行顺序（先写缓存，后通知监听器）。

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateApp;
use crate::ids::PackageId;

/// Chooser flow state.
///
/// 选择器流程状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooserState {
    /// A chooser is on screen with the given candidate entries.
    ///
    /// 选择器已展示。
    Presented { candidates: Vec<CandidateApp> },
    /// The flow is over; every further event is ignored.
    ///
    /// 流程已结束，后续事件一律忽略。
    Closed,
}

/// Events delivered by the UI host.
///
/// 由宿主 UI 回调驱动的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooserEvent {
    /// User tapped the candidate at `index`.
    ///
    /// 用户选中了第 `index` 项。
    ItemChosen { index: usize },
    /// User dismissed the chooser without choosing.
    ///
    /// 用户未选择即关闭。
    Cancelled,
    /// The screen hosting the chooser was destroyed while it was pending.
    ///
    /// 宿主界面在等待期间被销毁。
    ScreenDestroyed,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooserAction {
    /// Write the chosen package into the resolution cache.
    ///
    /// 将选中的包写入解析缓存。
    CacheSelection { package: PackageId },
    /// Tear down the lifecycle observer scoped to this chooser.
    ///
    /// 注销与选择器绑定的生命周期观察者。
    DetachObserver,
    /// Fan the outcome out to every registered selection listener
    /// (`None` = user cancelled).
    ///
    /// 向所有监听器广播结果（`None` 表示用户取消）。
    NotifySelection { package: Option<PackageId> },
    /// Forcibly dismiss the chooser surface (cancel, not select).
    ///
    /// 强制关闭选择器界面（取消，而非选中）。
    DismissSurface,
}

/// Pure chooser state machine.
///
/// Screen destruction deliberately emits no `NotifySelection`: tearing down
/// the screen is not a user verdict, so listeners keep waiting.
pub struct ChooserStateMachine;

impl ChooserStateMachine {
    pub fn transition(
        state: ChooserState,
        event: ChooserEvent,
    ) -> (ChooserState, Vec<ChooserAction>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?event, "chooser transition");
        match (state, event) {
            (ChooserState::Presented { candidates }, ChooserEvent::ItemChosen { index }) => {
                match candidates.get(index) {
                    Some(chosen) => {
                        let package = chosen.package.clone();
                        (
                            ChooserState::Closed,
                            vec![
                                ChooserAction::CacheSelection {
                                    package: package.clone(),
                                },
                                ChooserAction::DetachObserver,
                                ChooserAction::NotifySelection {
                                    package: Some(package),
                                },
                            ],
                        )
                    }
                    // Index outside the presented list: stay put.
                    None => (ChooserState::Presented { candidates }, Vec::new()),
                }
            }
            (ChooserState::Presented { .. }, ChooserEvent::Cancelled) => (
                ChooserState::Closed,
                vec![
                    ChooserAction::DetachObserver,
                    ChooserAction::NotifySelection { package: None },
                ],
            ),
            (ChooserState::Presented { .. }, ChooserEvent::ScreenDestroyed) => (
                ChooserState::Closed,
                vec![ChooserAction::DismissSurface, ChooserAction::DetachObserver],
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
