//! Dispatch through nested containers.
//!
//! Every node on the path logs its name into a shared journal, so each test
//! can assert exactly which handlers saw an event and in what order.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_tui::engine::EventBus;
use trellis_tui::input::keys::KEY_DELETE;
use trellis_tui::{
    Border, Container, Controller, Drawable, Error, Event, FocusStack, MemorySurface, Placement, Result, Screen,
    Surface, TextField, View,
};

type Journal = Rc<RefCell<Vec<String>>>;

// =============================================================================
// Fixtures
// =============================================================================

/// Container that journals every event and optionally stops it.
struct Probe {
    name: &'static str,
    view: View,
    journal: Journal,
    stop: bool,
}

impl Probe {
    fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            view: View::new(0, 0),
            journal: Rc::clone(journal),
            stop: false,
        }
    }

    fn at(mut self, x: i32, y: i32) -> Self {
        self.view.move_to(Some(x), Some(y));
        self
    }
}

impl Drawable for Probe {
    fn placement(&self) -> &Placement {
        self.view.placement()
    }

    fn placement_mut(&mut self) -> &mut Placement {
        self.view.placement_mut()
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        self.view.draw(x, y, surface);
    }

    fn handle_event(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        self.journal.borrow_mut().push(self.name.to_string());
        if self.stop {
            event.stop_propagation();
        }
        Ok(())
    }

    fn has_focus(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        self.view.has_focus(x, y, surface);
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for Probe {
    fn view(&self) -> &View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
}

/// Leaf that journals and optionally stops.
struct Tap {
    placement: Placement,
    journal: Journal,
    stop: bool,
}

impl Drawable for Tap {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, _x: i32, _y: i32, _surface: &mut dyn Surface) {}

    fn handle_event(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        self.journal.borrow_mut().push("leaf".to_string());
        if self.stop {
            event.stop_propagation();
        }
        Ok(())
    }
}

struct Root {
    screen: Screen,
    journal: Journal,
}

impl Controller for Root {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn handle_event(&mut self, _event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        self.journal.borrow_mut().push("controller".to_string());
        Ok(())
    }
}

/// `root -> mid -> leaf`, all active.
fn three_levels(leaf_stops: bool) -> (Root, Journal) {
    let journal = Journal::default();
    let mut mid = Probe::new("mid", &journal);
    mid.view.add(
        "leaf",
        Tap {
            placement: Placement::new(0, 0),
            journal: Rc::clone(&journal),
            stop: leaf_stops,
        },
    );
    mid.view.set_active("leaf");

    let mut root = Probe::new("root", &journal);
    root.view.add("mid", mid);
    root.view.set_active("mid");

    let mut screen = Screen::new();
    screen.add_view("main", root);
    (
        Root {
            screen,
            journal: Rc::clone(&journal),
        },
        journal,
    )
}

fn dispatch(controller: &mut Root, code: i32) -> Event {
    let event = Event::key(code);
    let mut surface = MemorySurface::new(10, 5);
    EventBus::new()
        .propagate(controller, &event, &mut surface)
        .unwrap();
    event
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

// =============================================================================
// Propagation
// =============================================================================

#[test]
fn stopped_at_leaf_reaches_nobody_else() {
    let (mut controller, journal) = three_levels(true);
    let event = dispatch(&mut controller, 'a' as i32);

    assert!(!event.should_handle());
    assert_eq!(entries(&journal), ["leaf"]);
}

#[test]
fn unhandled_event_reaches_controller_once() {
    let (mut controller, journal) = three_levels(false);
    dispatch(&mut controller, 'a' as i32);

    assert_eq!(entries(&journal), ["leaf", "mid", "root", "controller"]);
}

#[test]
fn stop_in_middle_is_one_shot() {
    let (mut controller, journal) = three_levels(false);
    controller
        .screen
        .view_mut::<Probe>("main")
        .unwrap()
        .view
        .component_mut::<Probe>("mid")
        .unwrap()
        .stop = true;

    dispatch(&mut controller, 'a' as i32);
    assert_eq!(entries(&journal), ["leaf", "mid"]);
}

#[test]
fn absent_active_slot_is_skipped() {
    let journal = Journal::default();
    let mut mid = Probe::new("mid", &journal);
    mid.view.reserve("leaf");
    mid.view.set_active("leaf");
    let mut root = Probe::new("root", &journal);
    root.view.add("mid", mid);
    root.view.set_active("mid");
    let mut screen = Screen::new();
    screen.add_view("main", root);
    let mut controller = Root {
        screen,
        journal: Rc::clone(&journal),
    };

    dispatch(&mut controller, 'a' as i32);
    assert_eq!(entries(&journal), ["mid", "root", "controller"]);

    let mut stack = FocusStack::new();
    assert!(controller.screen.focus_stack(&mut stack));
    assert_eq!(stack.len(), 3);
    assert!(!stack.leaf().unwrap().is_present());
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn nested_focus_stack_and_cumulative_cursor() {
    let journal = Journal::default();
    let mut form = Probe::new("form", &journal).at(2, 1);
    form.view.add("input", TextField::new(3, 1).with_text("abcd"));
    form.view.set_active("input");

    let mut main = Probe::new("main", &journal).at(4, 2);
    main.view.add("form", form);
    main.view.set_active("form");

    let mut screen = Screen::new();
    screen.add_view("main", main);

    let mut stack = FocusStack::new();
    screen.focus_stack(&mut stack);
    let names: Vec<Option<&str>> = stack.iter().map(|e| e.name()).collect();
    assert_eq!(names, [None, Some("form"), Some("input")]);

    let mut surface = MemorySurface::new(20, 6);
    screen.render(&mut surface);
    // 4 + 2 + 3 plus four typed characters; 2 + 1 + 1 down.
    assert_eq!(surface.canvas().cursor(), Some((13, 4)));
}

#[test]
fn sized_to_children() {
    let mut view = View::new(0, 0);
    view.add("a", Border::new(1, 1, 5, 2));
    view.add("b", Border::new(3, 3, 2, 2));
    view.size_to_contents();
    assert_eq!((view.width(), view.height()), (6, 5));
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn remove_then_readd_dispatches_to_new_value() {
    let mut view = View::new(0, 0);
    view.add("input", TextField::new(0, 0).with_text("old"));
    view.set_active("input");
    let mut screen = Screen::new();
    screen.add_view("main", view);
    let mut controller = Root {
        screen,
        journal: Journal::default(),
    };

    let main = controller.screen.view_mut::<View>("main").unwrap();
    assert!(main.remove_component("input").is_some());
    assert!(main.get_component("input").unwrap_err().is_not_found());
    assert!(matches!(
        main.component::<TextField>("input"),
        Err(Error::NotFound { .. })
    ));

    main.add("input", TextField::new(0, 0).with_text("new"));
    dispatch(&mut controller, KEY_DELETE);

    let text = controller
        .screen
        .view::<View>("main")
        .unwrap()
        .component::<TextField>("input")
        .unwrap()
        .text()
        .to_string();
    assert_eq!(text, "ne");
    assert!(entries(&controller.journal).is_empty());
}

#[test]
fn event_equality() {
    let q = Event::key('q' as i32);
    assert_eq!(q, 'q' as i32);
    assert!(q == "q");
    assert!(q == "Q");
    assert!(q == 'Q');
    assert!(q != 'w' as i32);
    assert!(q != "w");
}
