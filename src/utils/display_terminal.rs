//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부팅 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 등록 단계 진행 표시, 검증 결과 출력 등을
//! 시각적으로 표현합니다.

use crate::core::container::ValidationReport;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하며 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   App Started                    ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 부팅 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Registering core services
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 부팅 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Services registered (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 들여쓰기된 트리 구조로 출력합니다
///
/// ```text
///    ├─ NetworkService: OK
///    ├─ PreferencesStore: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 의존성 그래프 검증 실패 결과를 출력합니다
///
/// 수집된 결함 전부를 서브 작업 형태로 나열합니다.
///
/// ```text
/// ✗ Dependency graph validation failed (2 errors)
///    ├─ Component not found: ...
///    ├─ Circular dependency detected: ...
/// ```
pub fn print_validation_report(report: &ValidationReport) {
    println!(
        "✗ Dependency graph validation failed ({} errors)",
        report.errors.len()
    );
    for error in &report.errors {
        println!("   ├─ {}", error);
    }
}

/// 부팅 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 APP CONTEXT INITIALIZED            ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Registered Components: 5
/// ```
pub fn print_final_summary(components: usize) {
    println!();
    print_boxed_title("🎉 APP CONTEXT INITIALIZED");
    println!("   📦 Registered Components: {}", components);
    println!();
}
