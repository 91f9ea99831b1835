//! Paints a `PageView` with egui.
//!
//! Side-by-side layouts put the chat in a right side panel and scroll the
//! main region on its own with a hidden scrollbar. Stacked and single-column
//! layouts scroll the whole page.

use super::components::{
    render_about_card, render_about_card_skeleton, render_chat, render_chat_skeleton,
    render_floating_chat_toggle, render_header, render_header_skeleton, render_info_card,
    render_info_card_skeleton, render_video, render_video_skeleton,
};
use super::view::{LiveLayout, PageView, Panel, PanelKind, SkeletonLayout};
use crate::events::UiCommand;
use crate::layout::{GridSpec, MAIN_BOTTOM_PADDING, PANEL_SPACING};
use egui::scroll_area::ScrollBarVisibility;

pub(super) fn render_page(ui: &mut egui::Ui, view: &PageView) -> Option<UiCommand> {
    match view {
        PageView::Skeleton(layout) => {
            render_skeleton(ui, layout);
            None
        }
        PageView::Live(layout) => render_live(ui, layout),
    }
}

fn render_live(ui: &mut egui::Ui, layout: &LiveLayout) -> Option<UiCommand> {
    let mut command = layout
        .chat_toggle
        .as_ref()
        .and_then(|toggle| render_floating_chat_toggle(ui.ctx(), toggle));

    let chat = layout.chat.as_ref();
    let chat_command = render_grid(
        ui,
        layout.grid,
        |ui, width| render_main_panels(ui, &layout.main, width),
        chat.map(|chat| {
            move |ui: &mut egui::Ui, width: f32, height: f32| render_chat(ui, chat, width, height)
        }),
    );

    if chat_command.is_some() {
        command = chat_command;
    }
    command
}

fn render_skeleton(ui: &mut egui::Ui, layout: &SkeletonLayout) {
    let chat = layout.chat.then_some(|ui: &mut egui::Ui, width: f32, height: f32| {
        render_chat_skeleton(ui, width, height);
        None
    });

    render_grid(
        ui,
        layout.grid,
        |ui, width| render_main_skeletons(ui, &layout.main, width),
        chat,
    );
}

/// Places the main and chat regions according to `grid`.
/// Returns the command emitted by the chat region, if any.
fn render_grid<M, C>(
    ui: &mut egui::Ui,
    grid: GridSpec,
    render_main: M,
    render_chat_region: Option<C>,
) -> Option<UiCommand>
where
    M: FnOnce(&mut egui::Ui, f32),
    C: FnOnce(&mut egui::Ui, f32, f32) -> Option<UiCommand>,
{
    let (main_width, chat_width) = grid.column_widths(ui.available_width());
    let page_height = ui.available_height();
    let mut command = None;

    if grid.is_stacked() {
        egui::ScrollArea::vertical()
            .id_salt("stream_page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_main(ui, main_width);
                if let (Some(render_chat_region), Some(width)) = (render_chat_region, chat_width) {
                    command = render_chat_region(ui, width, page_height);
                }
            });
        return command;
    }

    if let (Some(render_chat_region), Some(width)) = (render_chat_region, chat_width) {
        egui::SidePanel::right("stream_chat_panel")
            .resizable(false)
            .exact_width(width)
            .frame(egui::Frame::new())
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                let height = ui.available_height();
                command = render_chat_region(ui, width, height);
            });
    }

    let scrollbar = if grid.main_scrolls_independently() {
        ScrollBarVisibility::AlwaysHidden
    } else {
        ScrollBarVisibility::VisibleWhenNeeded
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("stream_main_scroll")
                .auto_shrink([false, false])
                .scroll_bar_visibility(scrollbar)
                .show(ui, |ui| render_main(ui, main_width));
        });

    command
}

fn render_main_panels(ui: &mut egui::Ui, panels: &[Panel], width: f32) {
    ui.vertical(|ui| {
        for (index, panel) in panels.iter().enumerate() {
            if index > 0 {
                ui.add_space(PANEL_SPACING);
            }
            match panel {
                Panel::Video(view) => render_video(ui, view, width),
                Panel::Header(view) => render_header(ui, view, width),
                Panel::Info(view) => render_info_card(ui, view, width),
                Panel::About(view) => render_about_card(ui, view, width),
            }
        }
        ui.add_space(MAIN_BOTTOM_PADDING);
    });
}

fn render_main_skeletons(ui: &mut egui::Ui, kinds: &[PanelKind], width: f32) {
    ui.vertical(|ui| {
        for (index, kind) in kinds.iter().enumerate() {
            if index > 0 {
                ui.add_space(PANEL_SPACING);
            }
            match kind {
                PanelKind::Video => render_video_skeleton(ui, width),
                PanelKind::Header => render_header_skeleton(ui, width),
                PanelKind::Info => render_info_card_skeleton(ui, width),
                PanelKind::About => render_about_card_skeleton(ui, width),
                // The chat skeleton lives in its own region
                PanelKind::Chat => {}
            }
        }
        ui.add_space(MAIN_BOTTOM_PADDING);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ChatSidebar;
    use crate::layout::ViewportClass;
    use crate::models::{StreamPageData, ViewerCredentials};
    use crate::pages::stream::{FLOATING_TOGGLE_RIGHT, FLOATING_TOGGLE_TOP, StreamPlayer};
    use crate::session::SessionState;
    use egui::{Event, Id, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

    const WINDOW_HEIGHT: f32 = 900.0;

    /// One window width per viewport class
    const WIDTHS: [(ViewportClass, f32); 4] = [
        (ViewportClass::Narrow, 800.0),
        (ViewportClass::Medium, 1100.0),
        (ViewportClass::ExtraWide, 1300.0),
        (ViewportClass::Widest, 1700.0),
    ];

    fn page() -> StreamPageData {
        StreamPageData::from_json(
            r#"{
                "host": {"id": "u1", "username": "alice", "imageUrl": "", "followerCount": 3},
                "stream": {
                    "id": "s1", "isLive": true, "isChatDelayed": true,
                    "isChatEnabled": true, "isChatFollowersOnly": false, "name": "Test"
                },
                "isFollowing": true
            }"#,
        )
        .unwrap()
    }

    fn ready() -> SessionState {
        let viewer = ViewerCredentials::new("v1", "Viewer1", "tok")
            .into_identity()
            .unwrap();
        SessionState::Ready(viewer)
    }

    fn sidebar(collapsed: bool) -> ChatSidebar {
        let mut sidebar = ChatSidebar::new();
        if collapsed {
            sidebar.collapse();
        }
        sidebar
    }

    /// Runs one frame of the page and returns the command it emitted
    fn run_frame(
        ctx: &egui::Context,
        width: f32,
        events: Vec<Event>,
        session: &SessionState,
        sidebar: &ChatSidebar,
    ) -> Option<UiCommand> {
        let page = page();
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(
                Pos2::ZERO,
                Vec2::new(width, WINDOW_HEIGHT),
            )),
            events,
            ..Default::default()
        };

        let mut command = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::new())
                .show(ctx, |ui| {
                    command =
                        StreamPlayer::new(&page).show(ui, session, sidebar, "ws://localhost:7880");
                });
        });
        command
    }

    /// Presses and releases the primary button at `pos`
    fn click(
        ctx: &egui::Context,
        width: f32,
        pos: Pos2,
        session: &SessionState,
        sidebar: &ChatSidebar,
    ) -> Option<UiCommand> {
        let press = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };

        [
            vec![Event::PointerMoved(pos)],
            vec![press(true)],
            vec![press(false)],
        ]
        .into_iter()
        .filter_map(|events| run_frame(ctx, width, events, session, sidebar))
        .next()
    }

    fn floating_toggle_rect(ctx: &egui::Context) -> Option<Rect> {
        ctx.memory(|memory| memory.area_rect(Id::new("floating_chat_toggle")))
    }

    #[test]
    fn test_renders_every_layout_without_commands() {
        for (viewport, width) in WIDTHS {
            assert_eq!(ViewportClass::from_width(width), viewport);

            for session in [SessionState::Pending, ready()] {
                for collapsed in [false, true] {
                    let ctx = egui::Context::default();
                    for _ in 0..2 {
                        let command = run_frame(&ctx, width, Vec::new(), &session, &sidebar(collapsed));
                        assert_eq!(command, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_floating_toggle_anchored_top_right() {
        let ctx = egui::Context::default();
        let width = 1300.0;
        for _ in 0..3 {
            run_frame(&ctx, width, Vec::new(), &ready(), &sidebar(true));
        }

        let rect = floating_toggle_rect(&ctx).expect("floating toggle should be shown");
        assert!((rect.max.x - (width - FLOATING_TOGGLE_RIGHT)).abs() < 0.5);
        assert!((rect.min.y - FLOATING_TOGGLE_TOP).abs() < 0.5);
    }

    #[test]
    fn test_floating_toggle_absent_while_expanded_or_narrow() {
        for (width, collapsed) in [(1300.0, false), (800.0, true)] {
            let ctx = egui::Context::default();
            for _ in 0..3 {
                run_frame(&ctx, width, Vec::new(), &ready(), &sidebar(collapsed));
            }
            assert!(floating_toggle_rect(&ctx).is_none());
        }
    }

    #[test]
    fn test_floating_toggle_click_emits_toggle_chat() {
        let ctx = egui::Context::default();
        let width = 1300.0;
        let session = ready();
        let collapsed = sidebar(true);
        for _ in 0..3 {
            run_frame(&ctx, width, Vec::new(), &session, &collapsed);
        }

        let rect = floating_toggle_rect(&ctx).expect("floating toggle should be shown");
        assert_eq!(
            click(&ctx, width, rect.center(), &session, &collapsed),
            Some(UiCommand::ToggleChat)
        );
    }

    #[test]
    fn test_chat_header_toggle_emits_toggle_chat() {
        let ctx = egui::Context::default();
        let width = 1100.0;
        let session = ready();
        let expanded = sidebar(false);
        for _ in 0..3 {
            run_frame(&ctx, width, Vec::new(), &session, &expanded);
        }

        // The toggle is the first item in the chat column header
        let (main_width, _) = GridSpec::expanded(ViewportClass::Medium).column_widths(width);
        let pos = Pos2::new(main_width + 16.0, 16.0);
        assert_eq!(
            click(&ctx, width, pos, &session, &expanded),
            Some(UiCommand::ToggleChat)
        );
    }
}
