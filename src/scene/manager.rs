//! Active-scene bookkeeping

use super::{Scene, SceneRegistry};
use tracing::info;

/// Owns scene instances and tracks which one is active
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
    active: usize,
}

impl SceneManager {
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            active: 0,
        }
    }

    /// One instance of every registered scene, first one active
    pub fn from_registry(registry: &SceneRegistry) -> Self {
        let mut manager = Self::new();
        for entry in registry.entries() {
            manager.add_scene((entry.create)());
        }
        manager
    }

    /// The first scene added becomes active immediately
    pub fn add_scene(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
        if self.scenes.len() == 1 {
            self.active = 0;
            self.scenes[0].on_enter();
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn get(&self, index: usize) -> Option<&dyn Scene> {
        self.scenes.get(index).map(|s| s.as_ref())
    }

    pub fn active(&self) -> Option<&dyn Scene> {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        self.scenes.get_mut(self.active).map(|s| s.as_mut())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.scenes.iter().map(|s| s.name()).collect()
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.scenes
            .iter()
            .position(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn Scene + 'static)> {
        let idx = self.find(name)?;
        Some(self.scenes[idx].as_mut())
    }

    /// Switch scenes. Out-of-range and same-index requests are ignored.
    pub fn set_active_index(&mut self, index: usize) {
        if index >= self.scenes.len() || index == self.active {
            return;
        }
        self.scenes[self.active].on_exit();
        self.active = index;
        let scene = &mut self.scenes[index];
        info!("Switched to scene {}", scene.name());
        scene.on_enter();
    }

    /// Switch by name, returns `false` if no scene matches
    pub fn set_active_by_name(&mut self, name: &str) -> bool {
        match self.find(name) {
            Some(idx) => {
                self.set_active_index(idx);
                true
            }
            None => false,
        }
    }

    /// Cycle forward, wrapping around
    pub fn select_next(&mut self) {
        if !self.scenes.is_empty() {
            self.set_active_index((self.active + 1) % self.scenes.len());
        }
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FrameContext;
    use crate::rasterizer::Framebuffer;
    use crate::scene::{Control, ControlValue};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records lifecycle calls into a shared log
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Scene for Probe {
        fn name(&self) -> &'static str {
            self.name
        }
        fn on_enter(&mut self) {
            self.log.borrow_mut().push(format!("enter {}", self.name));
        }
        fn on_exit(&mut self) {
            self.log.borrow_mut().push(format!("exit {}", self.name));
        }
        fn reset(&mut self) {}
        fn update(&mut self, _ctx: &FrameContext) {}
        fn render(&mut self, _fb: &mut Framebuffer) {}
        fn describe_controls(&self) -> Vec<Control> {
            Vec::new()
        }
        fn set_control(&mut self, _name: &str, _value: ControlValue) -> bool {
            false
        }
    }

    fn manager_with(names: &[&'static str]) -> (SceneManager, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut m = SceneManager::new();
        for name in names {
            m.add_scene(Box::new(Probe { name, log: log.clone() }));
        }
        (m, log)
    }

    #[test]
    fn test_first_scene_entered_on_add() {
        let (m, log) = manager_with(&["a", "b"]);
        assert_eq!(m.active_index(), 0);
        assert_eq!(*log.borrow(), vec!["enter a"]);
    }

    #[test]
    fn test_switch_calls_exit_then_enter() {
        let (mut m, log) = manager_with(&["a", "b", "c"]);
        m.set_active_index(2);
        assert_eq!(m.active().map(|s| s.name()), Some("c"));
        assert_eq!(*log.borrow(), vec!["enter a", "exit a", "enter c"]);
    }

    #[test]
    fn test_invalid_or_same_switch_is_ignored() {
        let (mut m, log) = manager_with(&["a", "b"]);
        m.set_active_index(0);
        m.set_active_index(9);
        assert_eq!(m.active_index(), 0);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_switch_by_name_and_cycle() {
        let (mut m, _log) = manager_with(&["Alpha", "Beta"]);
        assert!(m.set_active_by_name("beta"));
        assert_eq!(m.active_index(), 1);
        assert!(!m.set_active_by_name("gamma"));
        m.select_next();
        assert_eq!(m.active_index(), 0);
    }

    #[test]
    fn test_empty_manager() {
        let mut m = SceneManager::new();
        assert!(m.active_mut().is_none());
        m.select_next();
        m.set_active_index(0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_registry_matches_registry_order() {
        let reg = SceneRegistry::builtin();
        let m = SceneManager::from_registry(&reg);
        assert_eq!(m.names(), reg.names());
    }
}
