//! End-to-end scenarios driving machines the way a host would.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tickstate::builder::{any_transition, transition, StateMachineBuilder};
use tickstate::core::{ChangeCause, State, StateChange};
use tickstate::error::Duplicate;
use tickstate::host::StateMachineOwner;
use tickstate::machine::{MachineConfig, MachinePhase, StateMachine};
use tickstate::{state_enum, FsmError};

state_enum! {
    enum Abc {
        A,
        B,
        C,
    }
}

struct Counting {
    kind: Abc,
    runs: Rc<Cell<u32>>,
}

impl State<Abc> for Counting {
    fn kind(&self) -> Abc {
        self.kind
    }

    fn on_run(&mut self, _context: &()) {
        self.runs.set(self.runs.get() + 1);
    }
}

#[test]
fn wildcard_overrides_ordinary_flow() {
    let c_runs = Rc::new(Cell::new(0));
    let mut machine: StateMachine<Abc> = StateMachine::new();
    machine
        .add_states(vec![
            Box::new(Counting {
                kind: Abc::A,
                runs: Rc::new(Cell::new(0)),
            }),
            Box::new(Counting {
                kind: Abc::B,
                runs: Rc::new(Cell::new(0)),
            }),
            Box::new(Counting {
                kind: Abc::C,
                runs: Rc::clone(&c_runs),
            }),
        ])
        .unwrap();

    let f = Rc::new(Cell::new(false));
    let g = Rc::new(Cell::new(false));
    let g_read = Rc::clone(&g);
    machine
        .add_any_transition(Abc::C, move |_| g_read.get())
        .unwrap();
    let f_read = Rc::clone(&f);
    machine
        .add_transition(Abc::A, Abc::B, move |_| f_read.get())
        .unwrap();

    machine.set_state(Abc::A).unwrap();

    f.set(true);
    machine.run();
    assert_eq!(machine.current_state(), Some(Abc::B));

    g.set(true);
    machine.run();
    assert_eq!(machine.current_state(), Some(Abc::C));
    assert_eq!(c_runs.get(), 1);

    f.set(false);
    g.set(false);
    for _ in 0..3 {
        machine.run();
    }
    assert_eq!(machine.current_state(), Some(Abc::C));
    assert_eq!(c_runs.get(), 4);

    let causes: Vec<ChangeCause> = machine.history().records().map(|r| r.cause).collect();
    assert_eq!(
        causes,
        vec![
            ChangeCause::Manual,
            ChangeCause::Transition(0),
            ChangeCause::AnyTransition(0),
        ]
    );
}

#[test]
fn second_registration_fails_and_keeps_first() {
    let runs = Rc::new(Cell::new(0));
    let mut machine: StateMachine<Abc> = StateMachine::new();
    machine
        .add_states(vec![Box::new(Counting {
            kind: Abc::A,
            runs: Rc::clone(&runs),
        })])
        .unwrap();

    let err = machine
        .add_states(vec![Box::new(Counting {
            kind: Abc::B,
            runs: Rc::clone(&runs),
        })])
        .unwrap_err();

    assert_eq!(
        err,
        FsmError::DuplicateRegistration(Duplicate::AlreadyPopulated)
    );
    assert!(machine.get_state(Abc::A).is_ok());
    assert_eq!(
        machine.set_state(Abc::B),
        Err(FsmError::UnknownState { state: "B" })
    );

    machine.set_state(Abc::A).unwrap();
    machine.run();
    assert_eq!(runs.get(), 1);
}

#[test]
fn machine_moves_through_phases() {
    let mut machine: StateMachine<Abc> =
        StateMachine::with_config((), MachineConfig::default().strict(false));
    assert_eq!(machine.phase(), MachinePhase::Unconfigured);

    machine
        .add_states(vec![Box::new(Counting {
            kind: Abc::A,
            runs: Rc::new(Cell::new(0)),
        })])
        .unwrap();
    assert_eq!(machine.phase(), MachinePhase::Configured);

    machine.set_state(Abc::A).unwrap();
    assert_eq!(machine.phase(), MachinePhase::Running);
}

// A small platformer character: input and physics live in the host and
// are shared with the machine through its context.

state_enum! {
    enum Motion {
        Idle,
        Walk,
        Jump,
        Dead,
    }
}

#[derive(Default)]
struct Input {
    horizontal: f32,
    jump_pressed: bool,
    grounded: bool,
    health: i32,
}

type World = RefCell<Input>;

struct Idle;

impl State<Motion, World> for Idle {
    fn kind(&self) -> Motion {
        Motion::Idle
    }
}

#[derive(Default)]
struct Walk {
    distance: f32,
}

impl State<Motion, World> for Walk {
    fn kind(&self) -> Motion {
        Motion::Walk
    }

    fn on_run(&mut self, world: &World) {
        self.distance += world.borrow().horizontal.abs();
    }
}

#[derive(Default)]
struct Jump {
    jumps: u32,
}

impl State<Motion, World> for Jump {
    fn kind(&self) -> Motion {
        Motion::Jump
    }

    fn on_enter(&mut self, world: &World) {
        self.jumps += 1;
        world.borrow_mut().grounded = false;
    }
}

struct Dead;

impl State<Motion, World> for Dead {
    fn kind(&self) -> Motion {
        Motion::Dead
    }
}

struct Player {
    machine: StateMachine<Motion, World>,
}

impl StateMachineOwner<Motion, World> for Player {
    fn state_machine(&self) -> &StateMachine<Motion, World> {
        &self.machine
    }

    fn state_machine_mut(&mut self) -> &mut StateMachine<Motion, World> {
        &mut self.machine
    }
}

impl Player {
    fn new() -> Self {
        let world = RefCell::new(Input {
            grounded: true,
            health: 3,
            ..Input::default()
        });
        let machine = StateMachineBuilder::<Motion, World>::with_context(world)
            .state(Idle)
            .state(Walk::default())
            .state(Jump::default())
            .state(Dead)
            .transition(any_transition(Motion::Dead, |w: &World| w.borrow().health <= 0))
            .unwrap()
            .transition(transition(Motion::Idle, Motion::Walk, |w: &World| {
                w.borrow().horizontal != 0.0
            }))
            .unwrap()
            .transition(transition(Motion::Walk, Motion::Idle, |w: &World| {
                w.borrow().horizontal == 0.0
            }))
            .unwrap()
            .transition(transition(Motion::Idle, Motion::Jump, |w: &World| {
                w.borrow().jump_pressed && w.borrow().grounded
            }))
            .unwrap()
            .transition(transition(Motion::Walk, Motion::Jump, |w: &World| {
                w.borrow().jump_pressed && w.borrow().grounded
            }))
            .unwrap()
            .transition(transition(Motion::Jump, Motion::Idle, |w: &World| {
                w.borrow().grounded
            }))
            .unwrap()
            .initial(Motion::Idle)
            .build()
            .unwrap();
        Self { machine }
    }

    fn input(&self, update: impl FnOnce(&mut Input)) {
        update(&mut self.machine.context().borrow_mut());
    }

    fn tick(&mut self) {
        self.machine.run();
    }
}

#[test]
fn player_walks_jumps_and_lands() {
    let mut player = Player::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&changes);
    player.add_state_listener(move |change: &StateChange<Motion>| log.borrow_mut().push(change.to));

    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Idle));

    player.input(|i| i.horizontal = 1.5);
    player.tick();
    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Walk));
    let walked = player
        .state_machine()
        .state_as::<Walk>(Motion::Walk)
        .unwrap()
        .distance;
    assert_eq!(walked, 3.0);

    player.input(|i| i.jump_pressed = true);
    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Jump));
    assert!(!player.state_machine().context().borrow().grounded);

    player.input(|i| {
        i.jump_pressed = false;
        i.grounded = true;
    });
    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Idle));

    assert_eq!(
        *changes.borrow(),
        vec![Motion::Walk, Motion::Jump, Motion::Idle]
    );
}

#[test]
fn player_dies_from_any_state() {
    for setup in [Motion::Idle, Motion::Walk, Motion::Jump] {
        let mut player = Player::new();
        player.set_state(setup).unwrap();

        player.input(|i| i.health = 0);
        player.tick();

        assert_eq!(player.current_state(), Some(Motion::Dead));
        assert_eq!(
            player.state_machine().last_transition().map(|t| t.is_wildcard()),
            Some(true)
        );
    }
}

#[test]
fn dead_player_stays_dead() {
    let mut player = Player::new();
    player.input(|i| {
        i.health = 0;
        i.horizontal = 1.0;
        i.jump_pressed = true;
    });

    for _ in 0..5 {
        player.tick();
    }

    assert_eq!(player.current_state(), Some(Motion::Dead));
    assert_eq!(player.state_machine().history().len(), 2);
}

#[test]
fn paused_player_keeps_running_current_state() {
    let mut player = Player::new();
    player.input(|i| i.horizontal = 2.0);
    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Walk));

    player.state_machine_mut().set_transitions_enabled(false);
    player.input(|i| i.horizontal = 0.0);
    player.tick();
    assert_eq!(player.current_state(), Some(Motion::Walk));

    player.input(|i| i.horizontal = 1.0);
    player.tick();
    let walked = player
        .state_machine()
        .state_as::<Walk>(Motion::Walk)
        .unwrap()
        .distance;
    assert_eq!(walked, 3.0);
}

#[test]
fn builder_reports_bad_wiring() {
    let result = StateMachineBuilder::<Abc>::new()
        .state(Counting {
            kind: Abc::A,
            runs: Rc::new(Cell::new(0)),
        })
        .transition(transition(Abc::A, Abc::C, |_: &()| true))
        .unwrap()
        .build();

    assert_eq!(result.unwrap_err(), FsmError::UnknownState { state: "C" });
}
