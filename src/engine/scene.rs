//! Scene graph: an ordered list of game objects plus their physics rules

use std::fmt;

use super::game::GameContext;
use super::object::{Bounds, GameObject, Handle, ObjectId};
use super::physics::{Bodies, Callback, Physics};
use crate::Canvas;
use crate::consts::COLOR_BACKGROUND;
use crate::renderer::RenderSurface;

/// The scene's children. This is also the scope collision callbacks run
/// against, so they can reach any object through its handle.
pub struct World {
    canvas: Canvas,
    objects: Vec<Box<dyn GameObject>>,
}

impl World {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            objects: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Append an object; update and render order follow insertion order
    pub fn add<T: GameObject>(&mut self, object: T) -> Handle<T> {
        let id = ObjectId(self.objects.len());
        self.objects.push(Box::new(object));
        Handle::new(id)
    }

    pub fn get<T: GameObject>(&self, handle: Handle<T>) -> Option<&T> {
        self.objects.get(handle.id().0)?.downcast_ref::<T>()
    }

    pub fn get_mut<T: GameObject>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.objects.get_mut(handle.id().0)?.downcast_mut::<T>()
    }

    pub fn object(&self, id: ObjectId) -> Option<&dyn GameObject> {
        self.objects.get(id.0).map(|obj| &**obj)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GameObject> {
        self.objects.iter().map(|obj| &**obj)
    }

    fn update_all(&mut self) {
        for object in &mut self.objects {
            object.update();
        }
    }

    fn render_all(&self, surface: &mut dyn RenderSurface) {
        for object in &self.objects {
            object.render(surface);
        }
    }
}

impl Bodies for World {
    fn bounds_of(&self, id: ObjectId) -> Option<Bounds> {
        self.object(id).map(|obj| obj.bounds())
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("canvas", &self.canvas)
            .field("objects", &self.objects.len())
            .finish()
    }
}

/// Populates a scene. Called exactly once, before the first frame.
pub trait SceneSetup {
    fn create(&mut self, scene: &mut Scene, ctx: &mut GameContext);
}

/// One active scene: children, physics, optional per-frame behaviors
pub struct Scene {
    world: World,
    physics: Physics<World>,
    behaviors: Vec<Callback<World>>,
    background: String,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            world: World::new(canvas),
            physics: Physics::new(canvas),
            behaviors: Vec::new(),
            background: COLOR_BACKGROUND.to_string(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.world.canvas()
    }

    pub fn set_background(&mut self, color: &str) {
        self.background = color.to_string();
    }

    pub fn add<T: GameObject>(&mut self, object: T) -> Handle<T> {
        self.world.add(object)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn physics(&self) -> &Physics<World> {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut Physics<World> {
        &mut self.physics
    }

    /// Run `behavior` every frame after physics has been evaluated
    pub fn on_frame(&mut self, behavior: impl FnMut(&mut World) + 'static) {
        self.behaviors.push(Box::new(behavior));
    }

    /// Update every child in order, then evaluate physics, then behaviors
    pub fn update(&mut self) {
        self.world.update_all();
        self.physics.update(&mut self.world);
        for behavior in &mut self.behaviors {
            behavior(&mut self.world);
        }
    }

    /// Repaint the background, then draw every child in order
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let canvas = self.world.canvas();
        surface.clear_rect(0.0, 0.0, canvas.width, canvas.height);
        surface.set_fill_style(&self.background);
        surface.fill_rect(0.0, 0.0, canvas.width, canvas.height);
        self.world.render_all(surface);
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("world", &self.world)
            .field("physics", &self.physics)
            .field("behaviors", &self.behaviors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::engine::object::ObjectBase;
    use crate::renderer::{DrawCommand, RecordingSurface};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        base: ObjectBase,
        name: &'static str,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log, bounds: Bounds) -> Self {
            Self {
                base: ObjectBase::new(bounds),
                name,
                log: log.clone(),
            }
        }
    }

    impl GameObject for Probe {
        fn base(&self) -> &ObjectBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ObjectBase {
            &mut self.base
        }

        fn update(&mut self) {
            self.log.borrow_mut().push(format!("update {}", self.name));
        }

        fn render(&self, surface: &mut dyn RenderSurface) {
            self.log.borrow_mut().push(format!("render {}", self.name));
            surface.fill_text(self.name, 0.0, 0.0);
        }
    }

    #[test]
    fn test_update_children_then_physics_then_behaviors() {
        let log: Log = Rc::default();
        let mut scene = Scene::new(Canvas::new(100.0, 100.0));
        let a = scene.add(Probe::new("a", &log, Bounds::new(15.0, 15.0, 1.0, 1.0)));
        let b = scene.add(Probe::new("b", &log, Bounds::new(10.0, 10.0, 20.0, 20.0)));

        let hit_log = log.clone();
        scene.physics_mut().on_collide(Some(a.id()), Some(b.id()), move |_| {
            hit_log.borrow_mut().push("hit".into());
        });
        let frame_log = log.clone();
        scene.on_frame(move |_| frame_log.borrow_mut().push("behavior".into()));

        scene.update();
        assert_eq!(*log.borrow(), vec!["update a", "update b", "hit", "behavior"]);
    }

    #[test]
    fn test_render_paints_background_first() {
        let log: Log = Rc::default();
        let mut scene = Scene::new(Canvas::new(40.0, 30.0));
        scene.add(Probe::new("first", &log, Bounds::default()));
        scene.add(Probe::new("second", &log, Bounds::default()));

        let mut surface = RecordingSurface::new();
        scene.render(&mut surface);

        assert_eq!(
            surface.commands[..3],
            [
                DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 40.0, height: 30.0 },
                DrawCommand::FillStyle(COLOR_BACKGROUND.into()),
                DrawCommand::FillRect { x: 0.0, y: 0.0, width: 40.0, height: 30.0 },
            ]
        );
        assert_eq!(surface.texts(), vec!["first", "second"]);
    }

    #[test]
    fn test_typed_access_through_handles() {
        let log: Log = Rc::default();
        let mut scene = Scene::new(Canvas::default());
        let probe = scene.add(Probe::new("p", &log, Bounds::new(1.0, 2.0, 3.0, 4.0)));

        scene.world_mut().get_mut(probe).unwrap().base.bounds.pos.x = 9.0;
        assert_eq!(scene.world().get(probe).unwrap().bounds().x(), 9.0);
        assert_eq!(scene.world().bounds_of(probe.id()).unwrap().x(), 9.0);
        assert_eq!(scene.world().len(), 1);
    }
}
