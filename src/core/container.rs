//! # Dependency Injection Container
//!
//! 추상 의존성을 구체 협력자로 해석하는 타입 키 기반 DI 컨테이너입니다.
//! 기능 모듈이 "무엇이 필요한가"만 선언하고 "어떻게 만드는가"는
//! 부팅 시점의 등록 블록에 위임하도록 합니다.
//!
//! ## 주요 구성 요소
//!
//! | 구성 요소 | 역할 |
//! |-----------|------|
//! | [`Container`] | 타입 키 → 팩토리 레지스트리. 명시적으로 생성되어 앱 컨텍스트가 소유 |
//! | [`ComponentScope`] | `Singleton`(캐시된 단일 인스턴스) / `Transient`(호출마다 새 인스턴스) |
//! | `ComponentFactory<T>` | 스코프 태그가 붙은 지연 생성자. 싱글톤은 첫 인스턴스를 캐시 |
//! | [`DependencyKey`] | 등록/검증에 쓰이는 타입 토큰 (`TypeId` + 타입 이름) |
//! | [`ValidationReport`] | 부팅 시 그래프 전체 검증 결과 (누락/순환 전부 수집) |
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 등록 (부팅, 단일 스레드)
//!    ├─ register::<T>(scope, factory)        팩토리 등록 (재등록 시 교체)
//!    ├─ register_instance::<T>(instance)     고정 인스턴스를 싱글톤으로 래핑
//!    └─ register_with_dependencies(...)      선언된 의존 키 기록 → validate 대상
//!
//! 2. 검증 (부팅 마지막 단계)
//!    └─ validate()                           누락된 등록 + 순환 그래프를
//!                                            한 번에 전부 보고
//!
//! 3. 해석 (런타임)
//!    └─ resolve::<T>()                       해석 스택에 키 push
//!                                            → 팩토리 호출 (재귀 해석 가능)
//!                                            → 모든 종료 경로에서 키 pop
//! ```
//!
//! ## 실패 의미론
//!
//! 누락된 등록(`Component not found`)과 순환 의존(`Circular dependency`)은
//! 런타임에 고칠 수 없는 구성 결함이므로 `resolve`에서는 진단 메시지와
//! 함께 패닉으로 종료합니다. 올바르게 부팅된 애플리케이션은
//! [`Container::validate`]가 이 결함들을 먼저 잡아내므로 해당 패닉에
//! 도달하지 않습니다.
//!
//! ## 스레드 계약
//!
//! 팩토리 등록은 동시 `resolve`가 시작되기 전, 단일 스레드 부팅 단계에서
//! 끝나야 합니다. 내부 `RwLock`은 `&self` API와 부팅 이후의 동시 해석을
//! 위한 것이며, 등록과 해석이 서로 다른 스레드에서 겹치는 사용은
//! 지원하지 않습니다. 순환 감지 상태는 최상위 `resolve` 호출 체인,
//! 즉 스레드 단위로 분리되어 있어 서로 다른 스레드가 겹치는 키를
//! 동시에 해석해도 순환으로 오인하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let container = Container::new();
//!
//! container.register_instance::<dyn NetworkService>(Arc::new(HttpNetworkService::new()));
//! container.register_with_dependencies::<dyn ArticlesRepository>(
//!     ComponentScope::Singleton,
//!     vec![DependencyKey::of::<dyn NetworkService>()],
//!     |c| Arc::new(ApiArticlesRepository::new(c.resolve::<dyn NetworkService>())),
//! );
//!
//! container.validate()?;
//! let repository = container.resolve::<dyn ArticlesRepository>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::thread::{self, ThreadId};

use thiserror::Error;

/// 컨테이너 구성 결함
///
/// 세 변형 모두 복구 불가능한 설정 오류를 나타냅니다.
/// `resolve` 경로에서는 패닉 진단으로, [`Container::validate`] 경로에서는
/// [`ValidationReport`]에 수집된 값으로 나타납니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// 선언된 의존성이 레지스트리에 등록되어 있지 않음
    #[error("Component not found: {component} (required by {required_by})")]
    ComponentNotFound {
        component: String,
        required_by: String,
    },

    /// 의존성 그래프에 순환이 존재함
    #[error("Circular dependency detected: {chain}")]
    CircularDependency { chain: String },

    /// 등록된 팩토리가 요청 타입과 일치하지 않음
    #[error("Invalid factory configuration for component: {component}")]
    InvalidFactory { component: String },
}

/// 부팅 시 그래프 검증 결과
///
/// 첫 결함에서 멈추지 않고 누락된 등록과 순환을 전부 수집하여
/// 개발자가 한 번에 고칠 수 있도록 합니다.
#[derive(Debug)]
pub struct ValidationReport {
    pub errors: Vec<ContainerError>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Dependency graph validation failed with {} error(s):",
            self.errors.len()
        )?;
        for error in &self.errors {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// 컴포넌트 생명주기 스코프
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentScope {
    /// 단일 인스턴스. 첫 해석 시 생성되어 레지스트리 수명 동안 캐시됩니다.
    Singleton,
    /// 해석할 때마다 새 인스턴스를 생성합니다.
    Transient,
}

/// 등록/의존성 선언에 쓰이는 타입 토큰
///
/// `TypeId`가 실제 키이며, 타입 이름은 진단 메시지 전용입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyKey {
    pub id: TypeId,
    pub name: &'static str,
}

impl DependencyKey {
    /// 타입 `T`의 키를 생성합니다
    ///
    /// trait 추상화는 `DependencyKey::of::<dyn NetworkService>()`처럼
    /// unsized 타입으로 지정합니다.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}

type FactoryFn<T> = Box<dyn Fn(&Container) -> Arc<T> + Send + Sync>;

/// 스코프 태그가 붙은 지연 생성자
///
/// 싱글톤 스코프는 첫 생성 인스턴스를 캐시하고 이후 항상 같은
/// `Arc`를 반환합니다. 트랜지언트 스코프는 매 호출 생성 로직을
/// 다시 실행합니다.
struct ComponentFactory<T: ?Sized> {
    scope: ComponentScope,
    factory: FactoryFn<T>,
    instance: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized + Send + Sync + 'static> ComponentFactory<T> {
    fn new(scope: ComponentScope, factory: FactoryFn<T>) -> Self {
        Self {
            scope,
            factory,
            instance: RwLock::new(None),
        }
    }

    fn resolve(&self, container: &Container) -> Arc<T> {
        match self.scope {
            ComponentScope::Singleton => {
                if let Some(existing) = self.instance.read().unwrap().as_ref() {
                    return Arc::clone(existing);
                }
                let created = (self.factory)(container);
                let mut slot = self.instance.write().unwrap();
                Arc::clone(slot.get_or_insert(created))
            }
            ComponentScope::Transient => (self.factory)(container),
        }
    }
}

/// 레지스트리 항목: 팩토리 + 진단/검증용 메타데이터
struct Registration {
    type_name: &'static str,
    dependencies: Vec<DependencyKey>,
    factory: Arc<dyn Any + Send + Sync>,
}

/// 타입 키 기반 의존성 주입 컨테이너
///
/// 프로세스 전역 싱글톤이 아니라 명시적으로 생성되는 값입니다.
/// 애플리케이션 컨텍스트가 소유하고 생성자들을 통해 전달됩니다.
pub struct Container {
    registrations: RwLock<HashMap<TypeId, Registration>>,
    /// 현재 해석 중인 (스레드, 키) 쌍들. 순환 감지는 같은 스레드의
    /// 항목에 대해서만 동작하므로, 서로 다른 스레드가 겹치는 키를
    /// 동시에 해석해도 거짓 순환으로 판정되지 않습니다. 최상위
    /// resolve가 끝나면 해당 스레드의 항목은 성공/실패와 무관하게
    /// 제거됩니다.
    resolution_stack: RwLock<Vec<(ThreadId, DependencyKey)>>,
}

/// 해석 스택 정리 가드
///
/// 팩토리 실행 중 패닉이 발생해도 스택에서 키가 제거되도록
/// 모든 종료 경로를 Drop으로 묶습니다.
struct StackGuard<'a> {
    container: &'a Container,
    thread_id: ThreadId,
    key_id: TypeId,
}

impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut stack) = self.container.resolution_stack.write() {
            if let Some(position) = stack
                .iter()
                .rposition(|(tid, entry)| *tid == self.thread_id && entry.id == self.key_id)
            {
                stack.remove(position);
            }
        }
    }
}

impl Container {
    /// 빈 컨테이너를 생성합니다
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(HashMap::new()),
            resolution_stack: RwLock::new(Vec::new()),
        }
    }

    /// 타입 `T`를 팩토리와 함께 등록합니다
    ///
    /// 같은 키에 대한 기존 등록은 교체됩니다. 의존성을 선언하지
    /// 않으므로 [`validate`](Container::validate)의 그래프 검사
    /// 대상에서 간선 없는 노드로 취급됩니다.
    pub fn register<T, F>(&self, scope: ComponentScope, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Arc<T> + Send + Sync + 'static,
    {
        self.register_with_dependencies::<T, F>(scope, Vec::new(), factory);
    }

    /// 타입 `T`를 선언된 의존성 목록과 함께 등록합니다
    ///
    /// `dependencies`는 팩토리가 내부에서 `resolve`할 키들의 선언이며,
    /// [`validate`](Container::validate)가 부팅 시점에 존재 여부와
    /// 순환 여부를 검사하는 데 사용합니다.
    pub fn register_with_dependencies<T, F>(
        &self,
        scope: ComponentScope,
        dependencies: Vec<DependencyKey>,
        factory: F,
    ) where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Arc<T> + Send + Sync + 'static,
    {
        let key = DependencyKey::of::<T>();
        let component_factory = ComponentFactory::<T>::new(scope, Box::new(factory));

        let mut registrations = self.registrations.write().unwrap();
        registrations.insert(
            key.id,
            Registration {
                type_name: key.name,
                dependencies,
                factory: Arc::new(component_factory),
            },
        );
    }

    /// 고정 인스턴스를 싱글톤으로 등록합니다
    ///
    /// 값을 자명한 팩토리로 감싸는 편의 메서드입니다.
    pub fn register_instance<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register::<T, _>(ComponentScope::Singleton, move |_| Arc::clone(&instance));
    }

    /// 타입 `T`가 등록되어 있는지 확인합니다
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.registrations
            .read()
            .unwrap()
            .contains_key(&TypeId::of::<T>())
    }

    /// 등록된 컴포넌트 수를 반환합니다
    pub fn registration_count(&self) -> usize {
        self.registrations.read().unwrap().len()
    }

    /// 타입 `T`를 해석합니다
    ///
    /// 팩토리는 같은 컨테이너에서 자신의 의존성을 재귀적으로 해석할 수
    /// 있습니다. 해석 스택의 키는 성공/실패 모든 종료 경로에서
    /// 제거됩니다.
    ///
    /// # Panics
    ///
    /// 구성 결함은 복구 불가능하므로 진단 메시지와 함께 패닉합니다:
    ///
    /// - **미등록 키**: `Component not found: ...`
    /// - **순환 의존**: `Circular dependency detected: A -> B -> A`
    /// - **팩토리 타입 불일치**: `Invalid factory configuration ...`
    ///
    /// 부팅 시 [`validate`](Container::validate)를 통과한 그래프는
    /// 선언된 경로에서 이 패닉에 도달하지 않습니다.
    pub fn resolve<T>(&self) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = DependencyKey::of::<T>();
        let thread_id = thread::current().id();

        // 순환 검사와 push는 하나의 임계 구역에서 원자적으로 수행한다.
        // 순환 판정은 같은 스레드의 항목에 대해서만 성립하며, 다른
        // 스레드의 진행 중인 해석은 순환이 아니다.
        {
            let mut stack = self.resolution_stack.write().unwrap();
            let duplicate = stack
                .iter()
                .any(|(tid, entry)| *tid == thread_id && entry.id == key.id);
            if duplicate {
                let mut names: Vec<&str> = stack
                    .iter()
                    .filter(|(tid, _)| *tid == thread_id)
                    .map(|(_, entry)| entry.name)
                    .collect();
                names.push(key.name);
                let chain = names.join(" -> ");
                drop(stack);
                panic!("Circular dependency detected: {}", chain);
            }
            stack.push((thread_id, key));
        }
        let _guard = StackGuard {
            container: self,
            thread_id,
            key_id: key.id,
        };

        // 팩토리 Arc만 복제하고 락을 즉시 해제한다.
        // 팩토리 실행 중 재귀 resolve가 레지스트리를 다시 읽기 때문.
        let factory = {
            let registrations = self.registrations.read().unwrap();
            registrations
                .get(&key.id)
                .map(|registration| Arc::clone(&registration.factory))
        };
        let factory = match factory {
            Some(factory) => factory,
            None => panic!(
                "Component not found: {}. Make sure it was registered before resolving.",
                key.name
            ),
        };

        let component_factory = match factory.downcast_ref::<ComponentFactory<T>>() {
            Some(component_factory) => component_factory,
            None => panic!("Invalid factory configuration for component: {}", key.name),
        };
        component_factory.resolve(self)
    }

    /// 타입 `T`를 해석하되, 미등록인 경우 `None`을 반환합니다
    ///
    /// # 제한 사항
    ///
    /// 이 진입점은 순환 감지에 참여하지 않습니다. 팩토리가 내부에서
    /// 순환을 일으키면 중첩된 `resolve` 호출 쪽에서 감지됩니다.
    /// 선언된 의존성 그래프에 대해서는
    /// [`validate`](Container::validate)가 진입점과 무관하게 순환을
    /// 보고하므로 부팅 검증을 권장합니다.
    pub fn resolve_optional<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = DependencyKey::of::<T>();

        let factory = {
            let registrations = self.registrations.read().unwrap();
            registrations
                .get(&key.id)
                .map(|registration| Arc::clone(&registration.factory))
        }?;

        let component_factory = factory.downcast_ref::<ComponentFactory<T>>()?;
        Some(component_factory.resolve(self))
    }

    /// 선언된 의존성 그래프를 부팅 시점에 검증합니다
    ///
    /// 두 단계 부팅의 2단계로, 비즈니스 로직이 실행되기 전에 구성
    /// 결함을 전부 수집합니다:
    ///
    /// 1. **존재 검사**: 모든 선언된 의존 키가 등록되어 있는가
    /// 2. **순환 검사**: 선언된 간선 위에서 DFS로 순환을 탐지
    ///
    /// 첫 결함에서 멈추지 않고 발견한 결함을 모두
    /// [`ValidationReport`]로 보고합니다.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let graph: HashMap<TypeId, (&'static str, Vec<DependencyKey>)> = {
            let registrations = self.registrations.read().unwrap();
            registrations
                .iter()
                .map(|(id, registration)| {
                    (
                        *id,
                        (registration.type_name, registration.dependencies.clone()),
                    )
                })
                .collect()
        };

        let mut errors = Vec::new();

        for (type_name, dependencies) in graph.values() {
            for dependency in dependencies {
                if !graph.contains_key(&dependency.id) {
                    errors.push(ContainerError::ComponentNotFound {
                        component: dependency.name.to_string(),
                        required_by: type_name.to_string(),
                    });
                }
            }
        }

        errors.extend(Self::find_cycles(&graph));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport { errors })
        }
    }

    /// 선언된 간선 위에서 DFS로 순환을 탐지합니다
    fn find_cycles(
        graph: &HashMap<TypeId, (&'static str, Vec<DependencyKey>)>,
    ) -> Vec<ContainerError> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Done,
        }

        fn visit(
            node: TypeId,
            graph: &HashMap<TypeId, (&'static str, Vec<DependencyKey>)>,
            states: &mut HashMap<TypeId, State>,
            path: &mut Vec<DependencyKey>,
            errors: &mut Vec<ContainerError>,
        ) {
            states.insert(node, State::Visiting);
            let (name, dependencies) = &graph[&node];
            path.push(DependencyKey { id: node, name: *name });

            for dependency in dependencies {
                if !graph.contains_key(&dependency.id) {
                    // 누락된 의존성은 존재 검사에서 이미 보고됨
                    continue;
                }
                match states
                    .get(&dependency.id)
                    .copied()
                    .unwrap_or(State::Unvisited)
                {
                    State::Visiting => {
                        let start = path
                            .iter()
                            .position(|entry| entry.id == dependency.id)
                            .unwrap_or(0);
                        let mut names: Vec<&str> =
                            path[start..].iter().map(|entry| entry.name).collect();
                        names.push(dependency.name);
                        errors.push(ContainerError::CircularDependency {
                            chain: names.join(" -> "),
                        });
                    }
                    State::Unvisited => {
                        visit(dependency.id, graph, states, path, errors);
                    }
                    State::Done => {}
                }
            }

            path.pop();
            states.insert(node, State::Done);
        }

        let mut states: HashMap<TypeId, State> = HashMap::new();
        let mut errors = Vec::new();
        let mut path = Vec::new();

        for node in graph.keys() {
            if states.get(node).copied().unwrap_or(State::Unvisited) == State::Unvisited {
                visit(*node, graph, &mut states, &mut path, &mut errors);
            }
        }
        errors
    }

    #[cfg(test)]
    fn resolution_depth(&self) -> usize {
        self.resolution_stack.read().unwrap().len()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
